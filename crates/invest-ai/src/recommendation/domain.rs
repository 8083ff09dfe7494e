use serde::{Deserialize, Deserializer, Serialize};

/// Questionnaire job tag that shifts weight toward location in the
/// rule-based derivation.
pub const JOB_ENTREPRENEUR: &str = "Pengusaha";
/// Questionnaire job tag that shifts weight sharply toward price.
pub const JOB_STUDENT: &str = "Mahasiswa";

/// Listing status meaning the unit is on the market.
pub const STATUS_FOR_SALE: &str = "Dijual";
/// Listing status meaning the unit can be occupied immediately.
pub const STATUS_MOVE_IN_READY: &str = "Siap Huni";
/// Listing status meaning the unit is still being built.
pub const STATUS_UNDER_CONSTRUCTION: &str = "Dalam Pembangunan";

/// Ordered budget bracket shared by the questionnaire and the listing
/// catalog. Listing brackets are derived from the advertised price via
/// [`FundBracket::from_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundBracket {
    #[serde(rename = "< 100 Juta")]
    UnderJt100,
    #[serde(rename = "100-500 Juta")]
    Jt100To500,
    #[serde(rename = "500 Juta-1 M")]
    Jt500ToM1,
    #[serde(rename = "1-5 M")]
    M1To5,
    #[serde(rename = "> 5 M")]
    OverM5,
}

const JT_100: u64 = 100_000_000;
const JT_500: u64 = 500_000_000;
const M_1: u64 = 1_000_000_000;
const M_5: u64 = 5_000_000_000;

impl FundBracket {
    /// Buckets a listing price into the bracket scale. Zero or missing
    /// prices land in the lowest bracket.
    pub fn from_price(price: u64) -> Self {
        if price < JT_100 {
            Self::UnderJt100
        } else if price < JT_500 {
            Self::Jt100To500
        } else if price < M_1 {
            Self::Jt500ToM1
        } else if price < M_5 {
            Self::M1To5
        } else {
            Self::OverM5
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Self::UnderJt100 => 1,
            Self::Jt100To500 => 2,
            Self::Jt500ToM1 => 3,
            Self::M1To5 => 4,
            Self::OverM5 => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UnderJt100 => "< 100 Juta",
            Self::Jt100To500 => "100-500 Juta",
            Self::Jt500ToM1 => "500 Juta-1 M",
            Self::M1To5 => "1-5 M",
            Self::OverM5 => "> 5 M",
        }
    }
}

/// Ordered monthly-income bracket from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "< 1 Juta")]
    UnderJt1,
    #[serde(rename = "1-5 Juta")]
    Jt1To5,
    #[serde(rename = "5-10 Juta")]
    Jt5To10,
    #[serde(rename = "10-50 Juta")]
    Jt10To50,
    #[serde(rename = "50-100 Juta")]
    Jt50To100,
    #[serde(rename = "100+ Juta")]
    OverJt100,
}

impl IncomeBracket {
    pub fn rank(self) -> u8 {
        match self {
            Self::UnderJt1 => 1,
            Self::Jt1To5 => 2,
            Self::Jt5To10 => 3,
            Self::Jt10To50 => 4,
            Self::Jt50To100 => 5,
            Self::OverJt100 => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UnderJt1 => "< 1 Juta",
            Self::Jt1To5 => "1-5 Juta",
            Self::Jt5To10 => "5-10 Juta",
            Self::Jt10To50 => "10-50 Juta",
            Self::Jt50To100 => "50-100 Juta",
            Self::OverJt100 => "100+ Juta",
        }
    }
}

/// Age bracket options presented by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18-24")]
    Age18To24,
    #[serde(rename = "25-34")]
    Age25To34,
    #[serde(rename = "35-44")]
    Age35To44,
    #[serde(rename = "45-54")]
    Age45To54,
    #[serde(rename = "55+")]
    Age55Plus,
}

impl AgeBracket {
    pub fn label(self) -> &'static str {
        match self {
            Self::Age18To24 => "18-24",
            Self::Age25To34 => "25-34",
            Self::Age35To44 => "35-44",
            Self::Age45To54 => "45-54",
            Self::Age55Plus => "55+",
        }
    }
}

/// Investment horizon. `Undecided` sits between the 1-3 and 3-5 year
/// brackets on the rank scale, so it never trips the urgent or patient
/// branches of the time term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "< 1 Tahun")]
    UnderOneYear,
    #[serde(rename = "1-3 Tahun")]
    OneToThree,
    #[serde(rename = "3-5 Tahun")]
    ThreeToFive,
    #[serde(rename = "> 5 Tahun")]
    OverFive,
    #[serde(rename = "Belum Menentukan")]
    Undecided,
}

impl Timeframe {
    pub fn rank(self) -> f64 {
        match self {
            Self::UnderOneYear => 1.0,
            Self::OneToThree => 2.0,
            Self::ThreeToFive => 3.0,
            Self::OverFive => 4.0,
            Self::Undecided => 2.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UnderOneYear => "< 1 Tahun",
            Self::OneToThree => "1-3 Tahun",
            Self::ThreeToFive => "3-5 Tahun",
            Self::OverFive => "> 5 Tahun",
            Self::Undecided => "Belum Menentukan",
        }
    }
}

/// How the user intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchasePlan {
    #[serde(rename = "KPR")]
    Mortgage,
    #[serde(rename = "Tunai")]
    Cash,
    #[serde(rename = "Belum Memutuskan")]
    Undecided,
}

impl PurchasePlan {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mortgage => "KPR",
            Self::Cash => "Tunai",
            Self::Undecided => "Belum Memutuskan",
        }
    }
}

/// Immutable snapshot of one questionnaire completion.
///
/// Every field is optional; absence means "no preference" and each scoring
/// term degrades to a zero contribution on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub job: Option<String>,
    pub age: Option<AgeBracket>,
    pub income: Option<IncomeBracket>,
    pub fund: Option<FundBracket>,
    pub plan: Option<PurchasePlan>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub variety: Vec<String>,
    pub time: Option<Timeframe>,
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub facility: Vec<String>,
}

/// One property record from the catalog.
///
/// `fund` is derived from `price` during catalog normalization and is not
/// expected on input; presentation fields (title, image, URL, coordinates)
/// pass through scoring untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<String>,
    pub location: Option<String>,
    pub price: u64,
    pub category: Option<String>,
    pub land_area: f64,
    pub building_area: f64,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund: Option<FundBracket>,
}

impl Listing {
    /// Catalog-normalization step deriving the price bracket. Must run
    /// before scoring so the price and income terms see a bracket.
    pub fn with_fund_bracket(self) -> Self {
        let fund = Some(FundBracket::from_price(self.price));
        Self { fund, ..self }
    }
}

/// Normalizes a whole catalog batch ahead of scoring.
pub fn normalize_catalog(listings: Vec<Listing>) -> Vec<Listing> {
    listings
        .into_iter()
        .map(Listing::with_fund_bracket)
        .collect()
}

/// A listing annotated with its request-scoped relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub mcda_score: f64,
}

/// Hard filters for the non-weighted recommendation mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicFilters {
    pub fund: Option<FundBracket>,
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub variety: Vec<String>,
}

/// Accepts preference tags either as a comma-delimited string (legacy
/// questionnaire payloads) or as a JSON list.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagInput {
        One(String),
        Many(Vec<String>),
    }

    let raw = Option::<TagInput>::deserialize(deserializer)?;
    let tags = match raw {
        None => Vec::new(),
        Some(TagInput::One(joined)) => joined.split(',').map(str::to_string).collect(),
        Some(TagInput::Many(list)) => list,
    };

    Ok(tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_bracket_thresholds() {
        assert_eq!(FundBracket::from_price(0), FundBracket::UnderJt100);
        assert_eq!(FundBracket::from_price(99_999_999), FundBracket::UnderJt100);
        assert_eq!(FundBracket::from_price(100_000_000), FundBracket::Jt100To500);
        assert_eq!(FundBracket::from_price(499_999_999), FundBracket::Jt100To500);
        assert_eq!(FundBracket::from_price(500_000_000), FundBracket::Jt500ToM1);
        assert_eq!(FundBracket::from_price(1_000_000_000), FundBracket::M1To5);
        assert_eq!(FundBracket::from_price(5_000_000_000), FundBracket::OverM5);
    }

    #[test]
    fn bracket_labels_round_trip() {
        for bracket in [
            FundBracket::UnderJt100,
            FundBracket::Jt100To500,
            FundBracket::Jt500ToM1,
            FundBracket::M1To5,
            FundBracket::OverM5,
        ] {
            let encoded = serde_json::to_string(&bracket).expect("bracket serializes");
            assert_eq!(encoded, format!("\"{}\"", bracket.label()));
            let decoded: FundBracket = serde_json::from_str(&encoded).expect("bracket parses");
            assert_eq!(decoded, bracket);
        }
    }

    #[test]
    fn timeframe_ranks_are_ordered_around_undecided() {
        assert_eq!(Timeframe::UnderOneYear.rank(), 1.0);
        assert_eq!(Timeframe::Undecided.rank(), 2.5);
        assert!(Timeframe::OneToThree.rank() < Timeframe::Undecided.rank());
        assert!(Timeframe::Undecided.rank() < Timeframe::ThreeToFive.rank());
    }

    #[test]
    fn variety_accepts_delimited_string() {
        let profile: UserProfile =
            serde_json::from_str(r#"{ "variety": "Rumah, Ruko , " }"#).expect("profile parses");
        assert_eq!(profile.variety, vec!["Rumah".to_string(), "Ruko".to_string()]);
    }

    #[test]
    fn variety_accepts_list() {
        let profile: UserProfile =
            serde_json::from_str(r#"{ "variety": ["Rumah", "Tanah"] }"#).expect("profile parses");
        assert_eq!(profile.variety, vec!["Rumah".to_string(), "Tanah".to_string()]);
    }

    #[test]
    fn empty_profile_has_no_preferences() {
        let profile: UserProfile = serde_json::from_str("{}").expect("profile parses");
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn listing_derives_fund_bracket_from_price() {
        let listing = Listing {
            price: 750_000_000,
            ..Listing::default()
        };
        let listing = listing.with_fund_bracket();
        assert_eq!(listing.fund, Some(FundBracket::Jt500ToM1));
    }

    #[test]
    fn scored_listing_flattens_on_serialization() {
        let scored = ScoredListing {
            listing: Listing {
                title: Some("Rumah Kebon Jeruk".to_string()),
                price: 450_000_000,
                ..Listing::default()
            }
            .with_fund_bracket(),
            mcda_score: 0.42,
        };
        let value = serde_json::to_value(&scored).expect("scored listing serializes");
        assert_eq!(value["title"], "Rumah Kebon Jeruk");
        assert_eq!(value["mcdaScore"], 0.42);
        assert_eq!(value["fund"], "100-500 Juta");
    }
}

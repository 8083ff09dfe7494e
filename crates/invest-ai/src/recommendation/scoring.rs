//! The MCDA listing scorer: eight weighted partial-match terms summed into
//! a bounded relevance score. Each term contributes zero when its profile
//! or listing field is absent, so scoring never fails.

use super::config::ScoringConfig;
use super::domain::{
    Listing, PurchasePlan, ScoredListing, UserProfile, STATUS_FOR_SALE, STATUS_MOVE_IN_READY,
    STATUS_UNDER_CONSTRUCTION,
};
use super::weights::CriteriaWeights;

/// Known city-district names plus their word tokens, lowercased. A match
/// on the bare city token counts for less than a district token.
pub const LOCATION_KEYWORDS: [&str; 11] = [
    "jakarta",
    "barat",
    "utara",
    "selatan",
    "timur",
    "pusat",
    "jakarta barat",
    "jakarta utara",
    "jakarta selatan",
    "jakarta timur",
    "jakarta pusat",
];

const GENERIC_REGION_TOKEN: &str = "jakarta";

/// Variety tag matched against house-like listing categories.
const RESIDENTIAL_TAG: &str = "residensial";
/// Variety tag matched against shop/office listing categories.
const COMMERCIAL_TAG: &str = "komersial";
const RESIDENTIAL_CATEGORIES: [&str; 3] = ["rumah", "apartment", "kondominium"];
const COMMERCIAL_CATEGORIES: [&str; 3] = ["toko", "kantor", "ruko"];

/// Request-scoped area normalizers. Computed once per batch before any
/// listing is scored, so every listing in the batch divides by the same
/// denominator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchMaxima {
    pub land_area: f64,
    pub building_area: f64,
}

impl BatchMaxima {
    pub fn from_listings(listings: &[Listing]) -> Self {
        Self {
            land_area: listings.iter().map(|l| l.land_area).fold(0.0, f64::max),
            building_area: listings
                .iter()
                .map(|l| l.building_area)
                .fold(0.0, f64::max),
        }
    }
}

/// Scores one listing against the profile and weight vector, clamping the
/// running total to 1.0. Bonus terms can push the raw sum past 1.0 before
/// the clamp; it is clamped rather than renormalized.
pub fn score_listing(
    listing: Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    maxima: &BatchMaxima,
    config: &ScoringConfig,
) -> ScoredListing {
    let score = price_term(&listing, profile, weights, config)
        + location_term(&listing, profile, weights, config)
        + category_term(&listing, profile, weights, config)
        + area_term(listing.land_area, maxima.land_area, weights.land_area)
        + area_term(
            listing.building_area,
            maxima.building_area,
            weights.building_area,
        )
        + plan_term(&listing, profile, weights, config)
        + income_term(&listing, profile, weights, config)
        + time_term(&listing, profile, weights, config);

    ScoredListing {
        listing,
        mcda_score: score.min(1.0),
    }
}

fn price_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let (Some(user_fund), Some(listing_fund)) = (profile.fund, listing.fund) else {
        return 0.0;
    };

    if listing_fund == user_fund {
        return weights.price;
    }

    let gap = (f64::from(user_fund.rank()) - f64::from(listing_fund.rank())).abs();
    let proximity = 1.0 - (gap / config.proximity_span).min(1.0);
    let mut term = weights.price * proximity;
    if listing_fund.rank() < user_fund.rank() {
        term += config.cheaper_bracket_bonus;
    }
    term
}

fn location_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let (Some(preferred), Some(listing_location)) =
        (profile.location.as_deref(), listing.location.as_deref())
    else {
        return 0.0;
    };

    let preferred = preferred.trim().to_lowercase();
    if preferred.is_empty() {
        return 0.0;
    }

    let listing_location = listing_location.to_lowercase();
    if listing_location.contains(&preferred) {
        return weights.location;
    }

    let strength = LOCATION_KEYWORDS
        .iter()
        .filter(|keyword| listing_location.contains(*keyword))
        .map(|keyword| {
            if *keyword == GENERIC_REGION_TOKEN {
                config.generic_region_strength
            } else {
                config.sub_region_strength
            }
        })
        .fold(0.0, f64::max);

    weights.location * strength
}

fn category_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let Some(category) = listing.category.as_deref() else {
        return 0.0;
    };
    if profile.variety.is_empty() {
        return 0.0;
    }

    let category = category.to_lowercase();
    let strength = profile
        .variety
        .iter()
        .map(|tag| {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && category.contains(&tag) {
                1.0
            } else if alias_matches(&tag, &category) {
                config.alias_strength
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max);

    weights.category * strength
}

fn alias_matches(tag: &str, category: &str) -> bool {
    let targets: &[&str] = match tag {
        RESIDENTIAL_TAG => &RESIDENTIAL_CATEGORIES,
        COMMERCIAL_TAG => &COMMERCIAL_CATEGORIES,
        _ => return false,
    };
    targets.iter().any(|token| category.contains(token))
}

fn area_term(value: f64, batch_max: f64, weight: f64) -> f64 {
    if batch_max > 0.0 && value > 0.0 {
        weight * (value / batch_max)
    } else {
        0.0
    }
}

fn plan_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let (Some(plan), Some(status)) = (profile.plan, listing.status.as_deref()) else {
        return 0.0;
    };

    match plan {
        PurchasePlan::Mortgage if status == STATUS_FOR_SALE => weights.plan,
        PurchasePlan::Cash if listing.price < config.cash_price_ceiling => weights.plan,
        PurchasePlan::Undecided => weights.plan * config.undecided_plan_factor,
        _ => 0.0,
    }
}

fn income_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let (Some(income), Some(user_fund), Some(listing_fund)) =
        (profile.income, profile.fund, listing.fund)
    else {
        return 0.0;
    };

    let income_rank = income.rank();
    let user_rank = user_fund.rank();
    let listing_rank = listing_fund.rank();

    if income_rank <= 3 && listing_rank <= user_rank {
        weights.income
    } else if income_rank >= 4 && listing_rank == user_rank {
        weights.income
    } else if (i16::from(listing_rank) - i16::from(user_rank)).abs() <= 1 {
        weights.income * config.near_bracket_factor
    } else {
        0.0
    }
}

fn time_term(
    listing: &Listing,
    profile: &UserProfile,
    weights: &CriteriaWeights,
    config: &ScoringConfig,
) -> f64 {
    let (Some(time), Some(status)) = (profile.time, listing.status.as_deref()) else {
        return 0.0;
    };

    let rank = time.rank();
    if rank == 1.0 && status == STATUS_MOVE_IN_READY {
        weights.time
    } else if rank >= 3.0 && (status == STATUS_MOVE_IN_READY || status == STATUS_UNDER_CONSTRUCTION)
    {
        weights.time
    } else {
        weights.time * config.flexible_time_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::domain::{FundBracket, IncomeBracket, Timeframe};

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn weights() -> CriteriaWeights {
        CriteriaWeights::baseline()
    }

    fn listing(price: u64) -> Listing {
        Listing {
            price,
            ..Listing::default()
        }
        .with_fund_bracket()
    }

    fn score(listing: Listing, profile: &UserProfile) -> f64 {
        let maxima = BatchMaxima::default();
        score_listing(listing, profile, &weights(), &maxima, &config()).mcda_score
    }

    #[test]
    fn empty_listing_and_profile_score_zero() {
        let scored = score(Listing::default(), &UserProfile::default());
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn exact_fund_match_earns_full_price_weight() {
        let profile = UserProfile {
            fund: Some(FundBracket::Jt100To500),
            ..UserProfile::default()
        };
        let scored = score(listing(300_000_000), &profile);
        assert!((scored - 0.25).abs() < 1e-9);
    }

    #[test]
    fn cheaper_bracket_gets_proximity_decay_plus_bonus() {
        // User rank 4, listing rank 2: 0.25 * (1 - 2/4) + 0.05 = 0.175.
        let profile = UserProfile {
            fund: Some(FundBracket::M1To5),
            ..UserProfile::default()
        };
        let scored = score(listing(300_000_000), &profile);
        assert!((scored - 0.175).abs() < 1e-9);
    }

    #[test]
    fn pricier_bracket_decays_without_bonus() {
        // User rank 1, listing rank 5: proximity 1 - min(4/4, 1) = 0.
        let profile = UserProfile {
            fund: Some(FundBracket::UnderJt100),
            ..UserProfile::default()
        };
        let scored = score(listing(6_000_000_000), &profile);
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn preferred_location_substring_earns_full_weight() {
        let profile = UserProfile {
            location: Some("Kebon Jeruk".to_string()),
            ..UserProfile::default()
        };
        let with_location = Listing {
            location: Some("Kebon Jeruk, Jakarta Barat".to_string()),
            ..Listing::default()
        };
        let scored = score(with_location, &profile);
        assert!((scored - 0.25).abs() < 1e-9);
    }

    #[test]
    fn district_token_scores_half_strength() {
        let profile = UserProfile {
            location: Some("Kemang".to_string()),
            ..UserProfile::default()
        };
        let elsewhere = Listing {
            location: Some("Pesanggrahan, Jakarta Selatan".to_string()),
            ..Listing::default()
        };
        let scored = score(elsewhere, &profile);
        assert!((scored - 0.25 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn bare_city_token_is_capped_lower() {
        let profile = UserProfile {
            location: Some("Bintaro".to_string()),
            ..UserProfile::default()
        };
        let generic = Listing {
            location: Some("Jakarta".to_string()),
            ..Listing::default()
        };
        let scored = score(generic, &profile);
        assert!((scored - 0.25 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn direct_category_substring_is_a_full_match() {
        let profile = UserProfile {
            variety: vec!["Rumah".to_string()],
            ..UserProfile::default()
        };
        let house = Listing {
            category: Some("Rumah".to_string()),
            ..Listing::default()
        };
        let scored = score(house, &profile);
        assert!((scored - 0.15).abs() < 1e-9);
    }

    #[test]
    fn residential_alias_matches_houses_at_reduced_strength() {
        let profile = UserProfile {
            variety: vec!["Residensial".to_string()],
            ..UserProfile::default()
        };
        let house = Listing {
            category: Some("Rumah".to_string()),
            ..Listing::default()
        };
        let scored = score(house, &profile);
        assert!((scored - 0.15 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn commercial_alias_matches_shophouses() {
        let profile = UserProfile {
            variety: vec!["Komersial".to_string()],
            ..UserProfile::default()
        };
        let shophouse = Listing {
            category: Some("Ruko".to_string()),
            ..Listing::default()
        };
        let scored = score(shophouse, &profile);
        assert!((scored - 0.15 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn area_terms_scale_by_batch_maxima() {
        let profile = UserProfile::default();
        let batch = vec![
            Listing {
                land_area: 200.0,
                building_area: 100.0,
                ..Listing::default()
            },
            Listing {
                land_area: 50.0,
                building_area: 50.0,
                ..Listing::default()
            },
        ];
        let maxima = BatchMaxima::from_listings(&batch);
        assert_eq!(maxima.land_area, 200.0);
        assert_eq!(maxima.building_area, 100.0);

        let scored = score_listing(batch[1].clone(), &profile, &weights(), &maxima, &config());
        // 0.10 * (50/200) + 0.10 * (50/100)
        assert!((scored.mcda_score - (0.10 * 0.25 + 0.10 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn zero_batch_maximum_skips_area_terms() {
        let scored = score(
            Listing {
                land_area: 0.0,
                building_area: 0.0,
                ..Listing::default()
            },
            &UserProfile::default(),
        );
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn mortgage_plan_matches_for_sale_status() {
        let profile = UserProfile {
            plan: Some(PurchasePlan::Mortgage),
            ..UserProfile::default()
        };
        let for_sale = Listing {
            status: Some(STATUS_FOR_SALE.to_string()),
            ..Listing::default()
        };
        let scored = score(for_sale, &profile);
        assert!((scored - 0.05).abs() < 1e-9);
    }

    #[test]
    fn cash_plan_matches_below_ceiling() {
        let profile = UserProfile {
            plan: Some(PurchasePlan::Cash),
            ..UserProfile::default()
        };
        let affordable = Listing {
            price: 900_000_000,
            status: Some(STATUS_MOVE_IN_READY.to_string()),
            ..Listing::default()
        };
        let scored = score(affordable, &profile);
        assert!((scored - 0.05).abs() < 1e-9);

        let expensive = Listing {
            price: 2_000_000_000,
            status: Some(STATUS_MOVE_IN_READY.to_string()),
            ..Listing::default()
        };
        let scored = score(expensive, &profile);
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn undecided_plan_earns_half_weight() {
        let profile = UserProfile {
            plan: Some(PurchasePlan::Undecided),
            ..UserProfile::default()
        };
        let any_status = Listing {
            status: Some(STATUS_UNDER_CONSTRUCTION.to_string()),
            ..Listing::default()
        };
        let scored = score(any_status, &profile);
        assert!((scored - 0.05 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn income_term_needs_both_profile_brackets() {
        let missing_fund = UserProfile {
            income: Some(IncomeBracket::Jt5To10),
            ..UserProfile::default()
        };
        let scored = score(listing(300_000_000), &missing_fund);
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn modest_income_accepts_anything_within_budget() {
        let profile = UserProfile {
            income: Some(IncomeBracket::Jt5To10),
            fund: Some(FundBracket::Jt500ToM1),
            ..UserProfile::default()
        };
        // Listing rank 2 <= user rank 3: full income weight on top of the
        // price proximity term.
        let scored = score(listing(300_000_000), &profile);
        let price_part = 0.25 * (1.0 - 1.0 / 4.0) + 0.05;
        assert!((scored - (price_part + 0.05)).abs() < 1e-9);
    }

    #[test]
    fn high_income_requires_exact_bracket_match() {
        let profile = UserProfile {
            income: Some(IncomeBracket::Jt50To100),
            fund: Some(FundBracket::Jt100To500),
            ..UserProfile::default()
        };
        // Exact bracket: price weight + income weight.
        let scored = score(listing(300_000_000), &profile);
        assert!((scored - (0.25 + 0.05)).abs() < 1e-9);

        // One rank away: half income weight plus decayed price term + bonus.
        let scored = score(listing(50_000_000), &profile);
        let price_part = 0.25 * 0.75 + 0.05;
        assert!((scored - (price_part + 0.05 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn urgent_buyers_want_move_in_ready() {
        let profile = UserProfile {
            time: Some(Timeframe::UnderOneYear),
            ..UserProfile::default()
        };
        let ready = Listing {
            status: Some(STATUS_MOVE_IN_READY.to_string()),
            ..Listing::default()
        };
        let scored = score(ready, &profile);
        assert!((scored - 0.05).abs() < 1e-9);
    }

    #[test]
    fn patient_buyers_accept_construction() {
        let profile = UserProfile {
            time: Some(Timeframe::OverFive),
            ..UserProfile::default()
        };
        let building = Listing {
            status: Some(STATUS_UNDER_CONSTRUCTION.to_string()),
            ..Listing::default()
        };
        let scored = score(building, &profile);
        assert!((scored - 0.05).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_status_falls_to_half_time_weight() {
        let profile = UserProfile {
            time: Some(Timeframe::Undecided),
            ..UserProfile::default()
        };
        let odd_status = Listing {
            status: Some("Disewakan".to_string()),
            ..Listing::default()
        };
        let scored = score(odd_status, &profile);
        assert!((scored - 0.05 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn score_is_clamped_to_one() {
        // A uniform-heavy weight vector plus the uncapped bonus can exceed
        // 1.0 before the clamp.
        let profile = UserProfile {
            fund: Some(FundBracket::OverM5),
            income: Some(IncomeBracket::Jt1To5),
            plan: Some(PurchasePlan::Cash),
            time: Some(Timeframe::OverFive),
            location: Some("Jakarta Barat".to_string()),
            variety: vec!["Rumah".to_string()],
            ..UserProfile::default()
        };
        let strong = Listing {
            price: 900_000_000,
            location: Some("Jakarta Barat".to_string()),
            category: Some("Rumah".to_string()),
            land_area: 500.0,
            building_area: 400.0,
            status: Some(STATUS_MOVE_IN_READY.to_string()),
            ..Listing::default()
        }
        .with_fund_bracket();
        let heavy = CriteriaWeights {
            price: 0.3,
            location: 0.3,
            category: 0.2,
            land_area: 0.1,
            building_area: 0.1,
            income: 0.1,
            plan: 0.1,
            time: 0.1,
        };
        let maxima = BatchMaxima::from_listings(std::slice::from_ref(&strong));
        let scored = score_listing(strong, &profile, &heavy, &maxima, &config());
        assert_eq!(scored.mcda_score, 1.0);
    }
}

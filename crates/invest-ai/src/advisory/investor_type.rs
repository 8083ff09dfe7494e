//! Investor-archetype classification: the oracle is asked for exactly one
//! archetype token, fuzzy variants are normalized through a fixed alias
//! map, and anything unusable drops to a deterministic rule-based
//! classifier over the questionnaire signals.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::oracle::AdvisoryOracle;
use super::prompts::investor_type_prompt;
use crate::recommendation::domain::UserProfile;

/// The five investor archetypes surfaced to the user after the
/// questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorType {
    PrivateInvestor,
    CorporateDeveloper,
    StrategicPartner,
    PublicPlanner,
    UrbanVisionary,
}

impl InvestorType {
    pub fn key(self) -> &'static str {
        match self {
            Self::PrivateInvestor => "private_investor",
            Self::CorporateDeveloper => "corporate_developer",
            Self::StrategicPartner => "strategic_partner",
            Self::PublicPlanner => "public_planner",
            Self::UrbanVisionary => "urban_visionary",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PrivateInvestor => "The Private Investor 🧑\u{200d}💼",
            Self::CorporateDeveloper => "The Corporate Developer 🏢",
            Self::StrategicPartner => "The Strategic Partner (B2B) 🤝",
            Self::PublicPlanner => "The Public Planner 🏛️",
            Self::UrbanVisionary => "The Urban Visionary 🏙️",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PrivateInvestor => {
                "Pengguna individu yang mencari peluang investasi properti secara mandiri. \
                 Biasanya berfokus pada pertumbuhan modal atau penghasilan pasif. Mereka \
                 membutuhkan rekomendasi properti yang selaras dengan anggaran pribadi dan \
                 horizon waktu investasi tertentu."
            }
            Self::CorporateDeveloper => {
                "Perusahaan pengembang properti yang mencari lokasi strategis untuk proyek \
                 residensial, komersial, atau mixed-use. Mereka membutuhkan data geospasial \
                 yang akurat, izin lahan, proyeksi ROI kawasan, serta potensi pertumbuhan \
                 nilai lahan untuk skala besar."
            }
            Self::StrategicPartner => {
                "Pihak ketiga seperti bank, lembaga keuangan, atau operator infrastruktur \
                 yang tertarik untuk berkolaborasi dalam pembangunan kawasan. Mereka \
                 membutuhkan analisis risiko kawasan, keterkaitan transportasi, hingga \
                 potensi permintaan pasar."
            }
            Self::PublicPlanner => {
                "Instansi pemerintah seperti Bappeda, dinas tata ruang, atau kementerian \
                 yang bertanggung jawab atas perencanaan kota dan pengawasan tata ruang. \
                 Mereka membutuhkan informasi properti berdasarkan peraturan zonasi, status \
                 sertifikat seperti HGB atau hak pakai, serta kesesuaian dengan Rencana Tata \
                 Ruang Wilayah (RTRW) dan rencana pengadaan lahan strategis."
            }
            Self::UrbanVisionary => {
                "Kelompok atau individu yang fokus pada pengembangan kawasan tematik: TOD \
                 (Transit-Oriented Development), kawasan hijau, smart city, atau pembangunan \
                 berkelanjutan. Mereka mencari properti atau lahan dengan potensi \
                 transformatif tinggi berdasarkan infrastruktur yang sedang atau akan \
                 dibangun."
            }
        }
    }
}

/// Maps a raw oracle reply onto an archetype, tolerating case, punctuation,
/// and a fixed set of shorthand variants. `None` means unusable.
pub fn normalize_raw_type(raw: &str) -> Option<InvestorType> {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    let investor_type = match cleaned.as_str() {
        "private_investor" | "privateinvestor" | "private" | "individual" => {
            InvestorType::PrivateInvestor
        }
        "corporate_developer" | "corporatedeveloper" | "corporate" | "developer" => {
            InvestorType::CorporateDeveloper
        }
        "strategic_partner" | "strategicpartner" | "strategic" | "partner" | "b2b" => {
            InvestorType::StrategicPartner
        }
        "public_planner" | "publicplanner" | "public" | "planner" | "government" => {
            InvestorType::PublicPlanner
        }
        "urban_visionary" | "urbanvisionary" | "urban" | "visionary" | "smart" => {
            InvestorType::UrbanVisionary
        }
        _ => return None,
    };

    Some(investor_type)
}

fn tag_contains(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Deterministic classifier used whenever the oracle output is unusable.
/// Branch order matters: the first matching archetype wins.
pub fn classify_rule_based(profile: &UserProfile) -> InvestorType {
    let job = profile
        .job
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let fund_rank = profile.fund.map(|fund| fund.rank()).unwrap_or(0);

    // Fund thresholds are inclusive of the 100-500 Juta bracket for both
    // the corporate and strategic branches.
    if job.contains("pengusaha") && fund_rank >= 2 {
        return InvestorType::CorporateDeveloper;
    }

    if job.contains("pendidik")
        || tag_contains(&profile.variety, "hgb")
        || tag_contains(&profile.variety, "hak pakai")
    {
        return InvestorType::PublicPlanner;
    }

    if tag_contains(&profile.variety, "campuran")
        || tag_contains(&profile.facility, "transportasi umum")
    {
        return InvestorType::UrbanVisionary;
    }

    if job.contains("insinyur") && (2..=4).contains(&fund_rank) {
        return InvestorType::StrategicPartner;
    }

    InvestorType::PrivateInvestor
}

/// Classification result with the fallback flag exposed for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "userType")]
    pub investor_type: InvestorType,
    #[serde(rename = "fallback")]
    pub used_fallback: bool,
}

/// Oracle-backed classifier with the rule-based fallback at the call site.
pub struct TypeClassifier<O> {
    oracle: Arc<O>,
}

impl<O: AdvisoryOracle> TypeClassifier<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    pub async fn classify(&self, profile: &UserProfile) -> Classification {
        match self.oracle.generate(&investor_type_prompt(profile)).await {
            Ok(reply) => match normalize_raw_type(&reply) {
                Some(investor_type) => Classification {
                    investor_type,
                    used_fallback: false,
                },
                None => {
                    warn!("investor-type reply unrecognized, classifying by rules");
                    Classification {
                        investor_type: classify_rule_based(profile),
                        used_fallback: true,
                    }
                }
            },
            Err(error) => {
                warn!(%error, "investor-type oracle unusable, classifying by rules");
                Classification {
                    investor_type: classify_rule_based(profile),
                    used_fallback: true,
                }
            }
        }
    }
}

//! Weight derivation: ask the oracle once, decode strictly, and fall back
//! to the rule-based policy on any failure. The fallback is silent to the
//! caller; the failure is only observable through logging and the
//! [`WeightSource`] flag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::oracle::{strip_json_fences, AdvisoryOracle, OracleError};
use super::prompts::weight_prompt;
use crate::recommendation::domain::UserProfile;
use crate::recommendation::rules::derive_rule_based;
use crate::recommendation::weights::{normalize, CriteriaWeights};

/// Structured oracle reply. All eight weight fields are required; a reply
/// missing any of them is a decode failure and triggers the fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightSuggestion {
    #[serde(flatten)]
    pub weights: CriteriaWeights,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Which construction path produced the weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    Oracle,
    RuleBased,
}

impl WeightSource {
    pub fn is_fallback(self) -> bool {
        self == Self::RuleBased
    }
}

/// Normalized weights plus provenance for observability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedWeights {
    pub weights: CriteriaWeights,
    pub rationale: Option<String>,
    pub source: WeightSource,
}

/// Strict decode of the oracle's weight reply, fences stripped first.
pub fn decode_weight_suggestion(text: &str) -> Result<WeightSuggestion, OracleError> {
    let suggestion: WeightSuggestion = serde_json::from_str(strip_json_fences(text))?;
    Ok(suggestion)
}

/// Derives criteria weights for one recommendation request: at most one
/// in-flight oracle call, no retry, rule-based fallback on any error.
pub struct WeightPlanner<O> {
    oracle: Arc<O>,
}

impl<O: AdvisoryOracle> WeightPlanner<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    pub async fn derive(&self, profile: &UserProfile) -> DerivedWeights {
        match self.suggest(profile).await {
            Ok(suggestion) => {
                debug!("weight oracle suggestion accepted");
                DerivedWeights {
                    weights: normalize(suggestion.weights),
                    rationale: suggestion.reasoning,
                    source: WeightSource::Oracle,
                }
            }
            Err(error) => {
                warn!(%error, "weight oracle unusable, deriving rule-based weights");
                DerivedWeights {
                    weights: derive_rule_based(profile),
                    rationale: None,
                    source: WeightSource::RuleBased,
                }
            }
        }
    }

    async fn suggest(&self, profile: &UserProfile) -> Result<WeightSuggestion, OracleError> {
        let reply = self.oracle.generate(&weight_prompt(profile)).await?;
        decode_weight_suggestion(&reply)
    }
}

use serde::{Deserialize, Serialize};

/// Tunable constants for the MCDA scorer and pipeline.
///
/// The defaults reproduce the reference behavior, including the two
/// step-function oddities that are preserved on purpose: the flat
/// cheaper-bracket bonus added outside the price weight, and the reduced
/// strength for a match on the generic city token alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Listings scoring below this are dropped in weighted mode.
    pub score_threshold: f64,
    /// Divisor for the linear price-bracket proximity decay.
    pub proximity_span: f64,
    /// Flat bonus for listings in a cheaper bracket than requested,
    /// added directly to the score and not capped by the price weight.
    pub cheaper_bracket_bonus: f64,
    /// Partial-match strength for a district token ("barat", "selatan", ...).
    pub sub_region_strength: f64,
    /// Partial-match strength when only the generic city token matches.
    pub generic_region_strength: f64,
    /// Match strength for the residential/commercial category aliases.
    pub alias_strength: f64,
    /// Price ceiling under which a cash plan earns the full plan weight.
    pub cash_price_ceiling: u64,
    /// Plan-weight factor for buyers who have not decided how to pay.
    pub undecided_plan_factor: f64,
    /// Income-weight factor when the listing bracket is within one rank.
    pub near_bracket_factor: f64,
    /// Time-weight factor for the catch-all timeframe branch.
    pub flexible_time_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.35,
            proximity_span: 4.0,
            cheaper_bracket_bonus: 0.05,
            sub_region_strength: 0.5,
            generic_region_strength: 0.3,
            alias_strength: 0.7,
            cash_price_ceiling: 1_000_000_000,
            undecided_plan_factor: 0.5,
            near_bracket_factor: 0.5,
            flexible_time_factor: 0.5,
        }
    }
}

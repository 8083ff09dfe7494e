//! Deterministic fallback policy deriving criteria weights from the
//! investor profile. Adjustments are layered as ordered overwrites: age
//! bracket first, then job, then income, then urgency, so a later rule wins
//! on any field it touches. The result always passes through the
//! normalizer.

use super::domain::{AgeBracket, IncomeBracket, Timeframe, UserProfile, JOB_ENTREPRENEUR, JOB_STUDENT};
use super::weights::{normalize, CriteriaWeights};

/// Weight forced onto the time criterion for urgent buyers.
pub const URGENT_TIME_WEIGHT: f64 = 0.15;
/// Weight forced onto the plan criterion for urgent buyers.
pub const URGENT_PLAN_WEIGHT: f64 = 0.10;
/// Fraction of budget pulled out of the six non-urgency criteria, split
/// evenly among them.
pub const URGENCY_REDUCTION: f64 = 0.20;
const NON_URGENCY_CRITERIA: f64 = 6.0;

/// Derives a normalized weight vector from the profile. Pure: the same
/// profile always yields the same vector, and a profile with every field
/// absent yields the normalized baseline.
pub fn derive_rule_based(profile: &UserProfile) -> CriteriaWeights {
    normalize(adjusted_weights(profile))
}

/// The pre-normalization vector after all rule overwrites. Exposed inside
/// the crate so the urgency multiplier can be asserted before the
/// normalizer reshapes the components.
pub(crate) fn adjusted_weights(profile: &UserProfile) -> CriteriaWeights {
    let weights = CriteriaWeights::baseline();
    let weights = apply_age(weights, profile.age);
    let weights = apply_job(weights, profile.job.as_deref());
    let weights = apply_income(weights, profile.income);
    apply_urgency(weights, profile.time)
}

fn apply_age(weights: CriteriaWeights, age: Option<AgeBracket>) -> CriteriaWeights {
    match age {
        Some(AgeBracket::Age18To24) => CriteriaWeights {
            price: 0.35,
            location: 0.30,
            category: 0.15,
            land_area: 0.05,
            building_area: 0.05,
            income: 0.05,
            plan: 0.03,
            time: 0.02,
        },
        Some(AgeBracket::Age25To34) => CriteriaWeights {
            price: 0.30,
            location: 0.25,
            category: 0.20,
            land_area: 0.08,
            building_area: 0.08,
            income: 0.05,
            plan: 0.02,
            time: 0.02,
        },
        Some(AgeBracket::Age35To44) => CriteriaWeights {
            price: 0.25,
            location: 0.20,
            category: 0.15,
            land_area: 0.15,
            building_area: 0.15,
            income: 0.05,
            plan: 0.03,
            time: 0.02,
        },
        _ => weights,
    }
}

fn apply_job(weights: CriteriaWeights, job: Option<&str>) -> CriteriaWeights {
    match job {
        Some(JOB_ENTREPRENEUR) => CriteriaWeights {
            price: 0.30,
            location: 0.35,
            category: 0.20,
            ..weights
        },
        Some(JOB_STUDENT) => CriteriaWeights {
            price: 0.40,
            location: 0.25,
            land_area: 0.05,
            building_area: 0.05,
            ..weights
        },
        _ => weights,
    }
}

fn apply_income(weights: CriteriaWeights, income: Option<IncomeBracket>) -> CriteriaWeights {
    match income {
        Some(bracket) if bracket.rank() <= 2 => CriteriaWeights {
            price: 0.40,
            location: 0.20,
            ..weights
        },
        Some(IncomeBracket::OverJt100) => CriteriaWeights {
            price: 0.15,
            location: 0.35,
            building_area: 0.20,
            ..weights
        },
        _ => weights,
    }
}

fn apply_urgency(weights: CriteriaWeights, time: Option<Timeframe>) -> CriteriaWeights {
    if time != Some(Timeframe::UnderOneYear) {
        return weights;
    }

    let shrink = 1.0 - URGENCY_REDUCTION / NON_URGENCY_CRITERIA;
    CriteriaWeights {
        price: weights.price * shrink,
        location: weights.location * shrink,
        category: weights.category * shrink,
        land_area: weights.land_area * shrink,
        building_area: weights.building_area * shrink,
        income: weights.income * shrink,
        plan: URGENT_PLAN_WEIGHT,
        time: URGENT_TIME_WEIGHT,
    }
}

use serde::{Deserialize, Serialize};

/// Minimum value any criterion may hold before renormalization.
pub const WEIGHT_FLOOR: f64 = 0.05;

/// Tolerance used when asserting the unit-sum invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Non-negative weight vector over the eight recommendation criteria.
///
/// Construction paths (baseline, rule-based, oracle-derived) all finish in
/// [`normalize`], so a `CriteriaWeights` handed to the scorer sums to 1.0
/// within [`SUM_TOLERANCE`] with every component positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaWeights {
    pub price: f64,
    pub location: f64,
    pub category: f64,
    pub land_area: f64,
    pub building_area: f64,
    pub income: f64,
    pub plan: f64,
    pub time: f64,
}

impl CriteriaWeights {
    /// The shared default vector both the rule-based deriver and the
    /// pipeline start from. Deliberately the only definition of these
    /// numbers in the crate.
    pub fn baseline() -> Self {
        Self {
            price: 0.25,
            location: 0.25,
            category: 0.15,
            land_area: 0.10,
            building_area: 0.10,
            income: 0.05,
            plan: 0.05,
            time: 0.05,
        }
    }

    pub fn sum(&self) -> f64 {
        self.price
            + self.location
            + self.category
            + self.land_area
            + self.building_area
            + self.income
            + self.plan
            + self.time
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            price: f(self.price),
            location: f(self.location),
            category: f(self.category),
            land_area: f(self.land_area),
            building_area: f(self.building_area),
            income: f(self.income),
            plan: f(self.plan),
            time: f(self.time),
        }
    }
}

/// Clamps every component to the floor and renormalizes to unit sum.
///
/// Non-finite and non-positive inputs collapse to the floor before the
/// division, so any raw vector produces a valid result; an all-zero input
/// degenerates to the uniform 1/8 vector. Renormalization can push a
/// floored component below the nominal floor when other components are
/// large; the reference behavior accepts that and does not re-clamp.
pub fn normalize(raw: CriteriaWeights) -> CriteriaWeights {
    let floored = raw.map(|value| {
        if value.is_finite() {
            value.max(WEIGHT_FLOOR)
        } else {
            WEIGHT_FLOOR
        }
    });

    let sum = floored.sum();
    floored.map(|value| value / sum)
}

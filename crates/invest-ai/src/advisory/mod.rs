//! Oracle-assisted advisory features: criteria-weight suggestions and
//! investor-archetype classification, each with a deterministic rule-based
//! fallback so the system keeps answering when the oracle does not.

pub mod investor_type;
pub mod oracle;
pub mod planner;
pub mod prompts;

pub use investor_type::{Classification, InvestorType, TypeClassifier};
pub use oracle::{AdvisoryOracle, DisabledOracle, GeminiOracle, OracleError};
pub use planner::{DerivedWeights, WeightPlanner, WeightSource};

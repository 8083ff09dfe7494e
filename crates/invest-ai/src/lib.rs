//! Recommendation core for the property-investment advisor.
//!
//! The [`recommendation`] module holds the MCDA scoring engine and the
//! pipeline that ranks a listing catalog against an investor profile. The
//! [`advisory`] module wraps the external weight-suggestion oracle and the
//! deterministic rule-based fallbacks that keep the core functional when the
//! oracle is unreachable.

pub mod advisory;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;

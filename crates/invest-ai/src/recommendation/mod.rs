//! Property recommendation core: catalog types, criteria weights, the MCDA
//! scorer, and the two pipeline modes, plus the HTTP surface that exposes
//! them.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod pipeline;
pub mod router;
pub mod rules;
pub mod scoring;
pub mod service;
pub mod weights;

pub use config::ScoringConfig;
pub use domain::{BasicFilters, Listing, ScoredListing, UserProfile};
pub use pipeline::RecommendationEngine;
pub use router::recommendation_router;
pub use service::{RecommendationOutcome, RecommendationService};
pub use weights::CriteriaWeights;

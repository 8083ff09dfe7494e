//! Facade tying weight derivation, archetype classification, and the
//! scoring engine together for the HTTP layer and the CLI.

use std::sync::Arc;

use serde::Serialize;

use super::config::ScoringConfig;
use super::domain::{BasicFilters, Listing, ScoredListing, UserProfile};
use super::pipeline::RecommendationEngine;
use crate::advisory::investor_type::{Classification, TypeClassifier};
use crate::advisory::oracle::AdvisoryOracle;
use crate::advisory::planner::{DerivedWeights, WeightPlanner};

/// A ranked weighted-mode result together with the weights that produced
/// it, so callers can surface the weight provenance next to the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationOutcome {
    pub listings: Vec<ScoredListing>,
    pub weights: DerivedWeights,
}

pub struct RecommendationService<O> {
    planner: WeightPlanner<O>,
    classifier: TypeClassifier<O>,
    engine: RecommendationEngine,
}

impl<O: AdvisoryOracle> RecommendationService<O> {
    pub fn new(oracle: Arc<O>, config: ScoringConfig) -> Self {
        Self {
            planner: WeightPlanner::new(Arc::clone(&oracle)),
            classifier: TypeClassifier::new(oracle),
            engine: RecommendationEngine::new(config),
        }
    }

    /// Weighted mode: derive weights for the profile, score the batch, and
    /// keep only listings clearing the threshold, best first.
    pub async fn recommend_weighted(
        &self,
        listings: Vec<Listing>,
        profile: &UserProfile,
    ) -> RecommendationOutcome {
        let weights = self.derive_weights(profile).await;
        let listings = self
            .engine
            .recommend_weighted(listings, profile, &weights.weights);
        RecommendationOutcome { listings, weights }
    }

    /// Basic mode: hard filters only, no oracle involvement.
    pub fn recommend_basic(&self, listings: Vec<Listing>, filters: &BasicFilters) -> Vec<Listing> {
        self.engine.recommend_basic(listings, filters)
    }

    pub async fn derive_weights(&self, profile: &UserProfile) -> DerivedWeights {
        self.planner.derive(profile).await
    }

    pub async fn classify_investor(&self, profile: &UserProfile) -> Classification {
        self.classifier.classify(profile).await
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }
}

use super::config::ScoringConfig;
use super::domain::{normalize_catalog, BasicFilters, Listing, ScoredListing, UserProfile};
use super::scoring::{score_listing, BatchMaxima};
use super::weights::CriteriaWeights;

/// Stateless engine applying the scoring configuration to listing batches.
///
/// Weighted mode and basic mode treat an empty result differently on
/// purpose: weighted mode reports "no good matches exist" with an empty
/// list, basic mode treats it as "filters too strict" and falls back to the
/// full input.
pub struct RecommendationEngine {
    config: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores every listing in the batch against one profile and weight
    /// vector. Two passes: the area maxima are fixed across the batch
    /// before any listing is scored.
    pub fn score_batch(
        &self,
        listings: Vec<Listing>,
        profile: &UserProfile,
        weights: &CriteriaWeights,
    ) -> Vec<ScoredListing> {
        let listings = normalize_catalog(listings);
        let maxima = BatchMaxima::from_listings(&listings);
        listings
            .into_iter()
            .map(|listing| score_listing(listing, profile, weights, &maxima, &self.config))
            .collect()
    }

    /// Weighted mode: score, drop listings under the threshold, sort
    /// descending by score. The sort is stable, so equal scores keep their
    /// catalog order. An empty result is returned as-is.
    pub fn recommend_weighted(
        &self,
        listings: Vec<Listing>,
        profile: &UserProfile,
        weights: &CriteriaWeights,
    ) -> Vec<ScoredListing> {
        let mut ranked: Vec<ScoredListing> = self
            .score_batch(listings, profile, weights)
            .into_iter()
            .filter(|scored| scored.mcda_score >= self.config.score_threshold)
            .collect();
        ranked.sort_by(|a, b| b.mcda_score.total_cmp(&a.mcda_score));
        ranked
    }

    /// Basic mode: sequential hard filters with a fall-back to the full
    /// input set when nothing survives.
    pub fn recommend_basic(&self, listings: Vec<Listing>, filters: &BasicFilters) -> Vec<Listing> {
        let listings = normalize_catalog(listings);
        let mut filtered = listings.clone();

        if let Some(fund) = filters.fund {
            filtered.retain(|listing| listing.fund == Some(fund));
        }

        if let Some(preferred) = filters
            .location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
        {
            let preferred = preferred.to_lowercase();
            filtered.retain(|listing| {
                listing
                    .location
                    .as_deref()
                    .is_some_and(|location| location.to_lowercase().contains(&preferred))
            });
        }

        if !filters.variety.is_empty() {
            filtered.retain(|listing| {
                listing.category.as_deref().is_some_and(|category| {
                    let category = category.to_lowercase();
                    filters
                        .variety
                        .iter()
                        .any(|tag| category.contains(&tag.trim().to_lowercase()))
                })
            });
        }

        if filtered.is_empty() {
            listings
        } else {
            filtered
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

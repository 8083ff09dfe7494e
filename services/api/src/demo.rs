use crate::infra::load_profile;
use clap::Args;
use invest_ai::advisory::DisabledOracle;
use invest_ai::error::AppError;
use invest_ai::recommendation::catalog;
use invest_ai::recommendation::rules::derive_rule_based;
use invest_ai::recommendation::{
    RecommendationService, ScoredListing, ScoringConfig, UserProfile,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Catalog CSV with camelCase headers (title, location, price, ...)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Investor profile as a JSON file. Defaults to an empty profile.
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Maximum number of ranked listings to print
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
}

#[derive(Args, Debug)]
pub(crate) struct WeightsArgs {
    /// Investor profile as a JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

/// Offline ranking run: no oracle, so weights come from the rule-based
/// derivation and the output is reproducible.
pub(crate) async fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        catalog: catalog_path,
        profile,
        top,
    } = args;

    let listings = catalog::from_path(&catalog_path)?;
    let profile = match profile {
        Some(path) => load_profile(&path)?,
        None => UserProfile::default(),
    };

    let service = RecommendationService::new(Arc::new(DisabledOracle), ScoringConfig::default());
    let outcome = service.recommend_weighted(listings, &profile).await;

    println!(
        "Ranked {} listing(s) above the relevance threshold",
        outcome.listings.len()
    );
    println!(
        "Weights (rule-based): {}",
        serde_json::to_string(&outcome.weights.weights)?
    );
    for (rank, scored) in outcome.listings.iter().take(top).enumerate() {
        print_ranked(rank + 1, scored);
    }

    Ok(())
}

pub(crate) fn run_weights(args: WeightsArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let weights = derive_rule_based(&profile);
    println!("{}", serde_json::to_string_pretty(&weights)?);
    Ok(())
}

fn print_ranked(rank: usize, scored: &ScoredListing) {
    let listing = &scored.listing;
    println!(
        "{rank:>3}. [{score:.3}] {title} | {location} | Rp {price}",
        score = scored.mcda_score,
        title = listing.title.as_deref().unwrap_or("(untitled)"),
        location = listing.location.as_deref().unwrap_or("(no location)"),
        price = listing.price,
    );
}

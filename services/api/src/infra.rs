use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use invest_ai::error::AppError;
use invest_ai::recommendation::UserProfile;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads an investor profile from a JSON file for the CLI commands.
pub(crate) fn load_profile(path: &Path) -> Result<UserProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&raw)?;
    Ok(profile)
}

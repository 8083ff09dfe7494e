use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{BasicFilters, Listing, UserProfile};
use super::service::RecommendationService;
use crate::advisory::oracle::AdvisoryOracle;

/// Router builder exposing the recommendation and advisory endpoints.
pub fn recommendation_router<O>(service: Arc<RecommendationService<O>>) -> Router
where
    O: AdvisoryOracle + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<O>))
        .route("/api/v1/weights", post(weights_handler::<O>))
        .route("/api/v1/investor-type", post(investor_type_handler::<O>))
        .with_state(service)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    #[default]
    Weighted,
    Basic,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Required; an empty array is valid input, a missing one is not.
    pub properties: Option<Vec<Listing>>,
    #[serde(default)]
    pub mode: RecommendationMode,
    pub profile: Option<UserProfile>,
    pub filters: Option<BasicFilters>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub profile: UserProfile,
}

fn bad_request(message: &str) -> Response {
    let payload = json!({
        "success": false,
        "error": message,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

pub(crate) async fn recommend_handler<O>(
    State(service): State<Arc<RecommendationService<O>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    O: AdvisoryOracle + 'static,
{
    let Some(properties) = request.properties else {
        return bad_request("request must include a properties array");
    };

    match request.mode {
        RecommendationMode::Weighted => {
            let Some(profile) = request.profile else {
                return bad_request("weighted mode requires a user profile");
            };
            let outcome = service.recommend_weighted(properties, &profile).await;
            let total = outcome.listings.len();
            let payload = json!({
                "success": true,
                "properties": outcome.listings,
                "totalCount": total,
                "weights": outcome.weights.weights,
                "usedFallback": outcome.weights.source.is_fallback(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        RecommendationMode::Basic => {
            let Some(filters) = request.filters else {
                return bad_request("basic mode requires filters");
            };
            let kept = service.recommend_basic(properties, &filters);
            let total = kept.len();
            let payload = json!({
                "success": true,
                "properties": kept,
                "totalCount": total,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn weights_handler<O>(
    State(service): State<Arc<RecommendationService<O>>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response
where
    O: AdvisoryOracle + 'static,
{
    let derived = service.derive_weights(&request.profile).await;
    let payload = json!({
        "success": true,
        "weights": derived.weights,
        "rationale": derived.rationale,
        "usedFallback": derived.source.is_fallback(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn investor_type_handler<O>(
    State(service): State<Arc<RecommendationService<O>>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response
where
    O: AdvisoryOracle + 'static,
{
    let classification = service.classify_investor(&request.profile).await;
    let payload = json!({
        "success": true,
        "userType": classification.investor_type.key(),
        "title": classification.investor_type.title(),
        "description": classification.investor_type.description(),
        "fallback": classification.used_fallback,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use invest_ai::advisory::{AdvisoryOracle, DisabledOracle, GeminiOracle};
use invest_ai::config::AppConfig;
use invest_ai::error::AppError;
use invest_ai::recommendation::{RecommendationService, ScoringConfig};
use invest_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The service type is fixed by the oracle choice, so each branch builds
    // its own router before the layers are applied.
    let app = match config.oracle.api_key.take() {
        Some(api_key) => {
            info!(model = %config.oracle.model, "advisory oracle enabled");
            let oracle = Arc::new(GeminiOracle::new(api_key, config.oracle.model.clone()));
            build_routes(oracle)
        }
        None => {
            info!("no oracle credentials, serving rule-based derivation only");
            build_routes(Arc::new(DisabledOracle))
        }
    };
    let app = app.layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "property recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_routes<O: AdvisoryOracle + 'static>(oracle: Arc<O>) -> axum::Router {
    let service = Arc::new(RecommendationService::new(oracle, ScoringConfig::default()));
    with_recommendation_routes(service)
}

//! adcopy API /v1: REST endpoints
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/catalog", get(handlers::catalog))
        .route("/v1/copy", post(handlers::copy))
        .route("/v1/emails", post(handlers::emails))
        .route("/v1/classifieds", post(handlers::classifieds))
        .route("/v1/score", post(handlers::score_text))
        .route("/v1/ab", post(handlers::ab_test))
        .route(
            "/v1/campaigns",
            post(handlers::record_campaign)
                .get(handlers::list_campaigns)
                .delete(handlers::clear_campaigns),
        )
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(config: ServiceConfig) -> std::io::Result<()> {
    let addr = config.addr.clone();
    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("adcopy API listening on {}", addr);
    axum::serve(listener, app).await
}

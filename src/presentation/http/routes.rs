//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/conference", conference_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Conference routes (protected)
fn conference_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::conference::organize_conference))
        .route("/seats/{id}", patch(handlers::conference::change_seats))
        .route("/dates/{id}", patch(handlers::conference::change_dates))
        .route("/book/{id}", post(handlers::conference::book_seat))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

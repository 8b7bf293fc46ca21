//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/fulfillment/select", post(handlers::select_source))
        .route("/fulfillment/evaluate", post(handlers::evaluate_candidate))
        .route("/fulfillment/plan", post(handlers::plan_shipment))
        .route("/fulfillment/options", post(handlers::shipment_options))
        .route("/zones/classify", post(handlers::classify_zones));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::info;
use super::predict;

/// Create the service router
///
/// Handlers are stateless, so the router carries no application state.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(info::service_info))
        .route("/health", get(health::health_check))
        .route("/predict", post(predict::predict))
        .layer(TraceLayer::new_for_http())
}

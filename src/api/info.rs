//! Service information endpoint

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

/// Fixed service description returned from the root path
#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointIndex,
}

/// Map of exposed endpoints to one-line descriptions
#[derive(Serialize)]
pub struct EndpointIndex {
    #[serde(rename = "GET /")]
    pub root: &'static str,
    #[serde(rename = "GET /health")]
    pub health: &'static str,
    #[serde(rename = "POST /predict")]
    pub predict: &'static str,
}

/// GET / - API information
pub async fn service_info() -> impl IntoResponse {
    let response = ServiceInfo {
        service: "Sentiment Analysis API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: EndpointIndex {
            root: "API information",
            health: "Health check",
            predict: "Analyze sentiment",
        },
    };

    (StatusCode::OK, Json(response))
}

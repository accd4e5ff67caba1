//! Health check endpoint for liveness probes

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

/// Health response body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - returns 200 unconditionally
///
/// This is a liveness probe, not a dependency check; the service has no
/// dependencies to verify.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse { status: "healthy" }).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}

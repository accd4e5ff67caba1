//! API error responses
//!
//! Two tiers only: client input errors (400) carry a bare `error` string;
//! unexpected errors (500) additionally carry `"success": false`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON body of an error response
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Client input error, reported as HTTP 400
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody {
                error: message.into(),
                success: None,
            },
        }
    }

    /// Unexpected error, reported as HTTP 500 with `"success": false`
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiErrorBody {
                error: message.into(),
                success: Some(false),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_body_omits_success() {
        let error = ApiError::bad_request("Text cannot be empty");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);

        let json = serde_json::to_string(&error.body).unwrap();
        assert_eq!(json, r#"{"error":"Text cannot be empty"}"#);
    }

    #[test]
    fn test_internal_body_carries_success_false() {
        let error = ApiError::internal("boom");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);

        let json = serde_json::to_string(&error.body).unwrap();
        assert_eq!(json, r#"{"error":"boom","success":false}"#);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

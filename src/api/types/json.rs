//! Custom JSON extractor that returns body failures as JSON
//!
//! Every rejection from `axum::Json` (missing body, invalid syntax, wrong
//! content type) collapses into the service's single 400 response:
//! `{"error": "No JSON data provided"}`.

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::Json` with service-shaped rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(JsonRejection)
            }
        }
    }
}

/// Rejection emitted when the body is absent or not valid JSON
#[derive(Debug)]
pub struct JsonRejection;

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        ApiError::bad_request("No JSON data provided").into_response()
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_rejection_into_response() {
        let response = JsonRejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_into_response_is_ok() {
        let response = Json(serde_json::json!({"status": "healthy"})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

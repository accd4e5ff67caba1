//! Sentiment prediction endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::types::{ApiError, Json};
use crate::domain::sentiment::{classify, Sentiment};

/// Request body for POST /predict
///
/// `text` is kept as a raw JSON value so a missing field and a field of the
/// wrong type can be told apart during validation.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Successful classification response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub success: bool,
}

/// POST /predict - classify the submitted text
///
/// Validation short-circuits in order: body must be JSON (handled by the
/// extractor), `text` must be present, and `text` must be non-empty after
/// trimming. A `text` field of a non-string type is an unexpected error
/// and surfaces as HTTP 500.
pub async fn predict(
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let value = request
        .text
        .ok_or_else(|| ApiError::bad_request("Missing 'text' field in JSON"))?;

    let text = match value {
        Value::String(text) => text,
        other => {
            return Err(ApiError::internal(format!(
                "'text' field must be a string, got: {other}"
            )));
        }
    };

    let text = text.trim();

    if text.is_empty() {
        return Err(ApiError::bad_request("Text cannot be empty"));
    }

    let result = classify(text);
    debug!(sentiment = %result.sentiment, confidence = result.confidence, "Classified text");

    Ok(Json(PredictResponse {
        text: text.to_owned(),
        sentiment: result.sentiment,
        confidence: result.confidence,
        success: true,
    }))
}

//! Wire types exchanged between the frontend, the backend and the upstream
//! inference service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PREDICT_PATH: &str = "/api/predict";

/// Generic message for an upstream non-success status.
pub const UPSTREAM_FAILURE: &str = "Failed to get prediction from API";
/// Generic message for transport failures and anything unexpected.
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const INVALID_PAYLOAD: &str = "Invalid prediction payload";

/// Uniform error body returned by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub details: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }
}

/// Success body of the inference service, relayed untouched by the gateway.
/// `data` stays a raw value; see `PredictionLabel::from_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub data: Value,
}

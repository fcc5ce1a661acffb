use crate::config::GatewayConfig;
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{HttpResponse, ResponseError};
use common::requests::{ApiError, INTERNAL_ERROR, INVALID_PAYLOAD, UPSTREAM_FAILURE};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;

/// Failure of one forwarded request. Each variant maps onto the uniform
/// `ApiError` body the frontend expects.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request body is not a well-formed feature vector.
    #[error("invalid prediction payload: {0}")]
    InvalidPayload(String),
    /// The upstream answered with a non-success status.
    #[error("upstream answered {status}: {body}")]
    Upstream { status: u16, body: String },
    /// The request never completed (DNS, connect, TLS, broken body stream).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The upstream answered 2xx with a body that is not JSON.
    #[error("upstream response is not valid JSON: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn body(&self) -> ApiError {
        match self {
            GatewayError::InvalidPayload(details) => ApiError::new(INVALID_PAYLOAD, details.clone()),
            GatewayError::Upstream { body, .. } => ApiError::new(UPSTREAM_FAILURE, body.clone()),
            GatewayError::Transport(err) => ApiError::new(INTERNAL_ERROR, err.to_string()),
            GatewayError::InvalidResponse(details) => ApiError::new(INTERNAL_ERROR, details.clone()),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::Transport(_) | GatewayError::InvalidResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Forwards feature vectors to the inference service.
///
/// One instance is shared by all workers; `reqwest::Client` pools connections
/// internally. No timeout is set beyond the transport defaults, and nothing is
/// retried or cached.
#[derive(Debug, Clone)]
pub struct PredictionGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl PredictionGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: config.inference_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `body` unchanged as JSON and returns the upstream JSON as is.
    pub async fn forward(&self, body: Bytes) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_mirrors_status_and_keeps_details() {
        let err = GatewayError::Upstream {
            status: 503,
            body: "model overloaded".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.body(),
            ApiError::new("Failed to get prediction from API", "model overloaded")
        );
    }

    #[test]
    fn invalid_payload_is_a_bad_request() {
        let err = GatewayError::InvalidPayload("missing field `Age`".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ApiError::new("Invalid prediction payload", "missing field `Age`")
        );
    }

    #[test]
    fn invalid_response_is_an_internal_error() {
        let err = GatewayError::InvalidResponse("expected value at line 1".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, "Internal server error");
    }

    #[test]
    fn gateway_uses_the_injected_endpoint() {
        let config = GatewayConfig {
            inference_url: "http://inference.internal/predict".to_string(),
        };
        let gateway = PredictionGateway::new(&config).unwrap();
        assert_eq!(gateway.endpoint(), "http://inference.internal/predict");
    }
}

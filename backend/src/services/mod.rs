//! HTTP services exposed under `/api`.
//!
//! - `predict`: forwards encoded customer features to the inference service.

pub mod predict;

use actix_web::web;

/// Body size limit shared by every endpoint.
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

//! # Prediction Service Module
//!
//! Thin proxy between the browser and the external inference service. The
//! browser never learns the upstream address; it only talks to
//! `POST /api/predict`.
//!
//! ## Sub-modules:
//! - `gateway`: the shared HTTP client and the upstream error taxonomy.
//! - `forward`: the request handler relaying one feature vector.

mod forward;
mod gateway;

pub use gateway::PredictionGateway;

use actix_web::web::{post, scope};
use actix_web::Scope;
use common::requests::PREDICT_PATH;

/// Configures and returns the Actix `Scope` for the prediction route.
///
/// # Registered Routes:
///
/// *   **`POST /api/predict`**:
///     - **Handler**: `forward::process`
///     - **Description**: Accepts a feature vector in the upstream wire layout
///       (`CreditScore`, `Gender`, ..., `Geography_Spain`), forwards it to the
///       configured inference URL byte for byte and answers with the upstream
///       JSON untouched. A body that is not a valid vector gets 400. Failures are answered as `{ "error", "details" }` with the
///       upstream status, or 500 when the upstream could not be reached.
pub fn configure_routes() -> Scope {
    scope(PREDICT_PATH).route("", post().to(forward::process))
}

//! Shared domain for the churn predictor.
//!
//! Everything here compiles for both the actix server and the `wasm32` frontend:
//! the customer data model, form validation, the feature encoder, the report
//! content model and the submission state machine driven by the UI.

pub mod encoding;
pub mod model;
pub mod report;
pub mod requests;
pub mod session;
pub mod validation;

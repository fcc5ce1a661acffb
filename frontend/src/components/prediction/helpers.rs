//! Utility functions for the prediction page.
//!
//! - **Backend call**: `fetch_prediction` wraps `/api/predict` and reduces
//!   every failure to a displayable string.
//! - **Download**: `save_pdf` hands rendered bytes to the browser as a file.
//! - **User feedback**: `show_toast` for transient notices, `submit_label` for
//!   the submit button text.

use chrono::{DateTime, Utc};
use common::model::{FeatureVector, PredictionLabel};
use common::requests::{ApiError, PredictionResponse, PREDICT_PATH};
use common::session::{Phase, SubmissionSession};
use gloo_file::{Blob, ObjectUrl};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

pub const PREDICTION_FAILED: &str = "Failed to get prediction. Please try again.";
pub const REPORT_FAILED: &str = "Failed to generate report. Please try again.";

/// How long the blob URL outlives the click that starts the download.
const REVOKE_DELAY_MS: u32 = 10_000;

/// Text of the submit button for the current session.
pub fn submit_label(session: &SubmissionSession) -> &'static str {
    if session.phase() == Phase::Submitting {
        "Processing..."
    } else if !session.form().is_valid() {
        "Complete All Fields"
    } else {
        "Get Prediction"
    }
}

/// Current instant from the browser clock.
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Reads the `details` of an `ApiError` body, falling back to the status line.
async fn failure_details(response: Response) -> String {
    let status = format!("HTTP {} {}", response.status(), response.status_text());
    match response.json::<ApiError>().await {
        Ok(body) if !body.details.is_empty() => body.details,
        Ok(body) => body.error,
        Err(_) => status,
    }
}

/// Posts `features` to the gateway and extracts the predicted label.
pub async fn fetch_prediction(features: &FeatureVector) -> Result<PredictionLabel, String> {
    let response = Request::post(PREDICT_PATH)
        .json(features)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(failure_details(response).await);
    }

    let body = response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| e.to_string())?;
    PredictionLabel::from_value(&body.data).map_err(|e| e.to_string())
}

/// Offers `bytes` as a download named `filename` through a temporary anchor.
/// The object URL stays valid for `REVOKE_DELAY_MS` after the click.
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document available")?;
    let body = document.body().ok_or("document has no body")?;

    let blob = Blob::new_with_options(bytes, Some("application/pdf"));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "cannot create download link")?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    body.append_child(&anchor)
        .map_err(|_| "cannot attach download link")?;
    anchor.click();
    body.remove_child(&anchor).ok();
    Timeout::new(REVOKE_DELAY_MS, move || drop(url)).forget();
    Ok(())
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

//! Churn report built in the browser.
//!
//! The PDF is a pure function of a `PredictionResult` the page already holds;
//! nothing is sent over the network.

mod pdf;

pub use pdf::ReportError;

use common::model::PredictionResult;
use common::report::ReportContent;

/// A rendered report ready to be offered as a download.
pub struct RenderedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn build_report(result: &PredictionResult) -> Result<RenderedReport, ReportError> {
    let content = ReportContent::from_result(result);
    let bytes = pdf::render_pdf(&content)?;
    Ok(RenderedReport {
        filename: content.filename,
        bytes,
    })
}

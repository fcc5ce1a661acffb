//! Update function for the prediction page.
//!
//! Elm-style: receives the current `PredictionComponent`, the `Context` and a
//! `Msg`, mutates the session accordingly and returns whether to re-render.
//!
//! Key behaviors
//! - Every field edit re-validates the whole form through the session.
//! - Submitting encodes the form and posts it to `/api/predict`; the response
//!   lands only if that request is still the pending one.
//! - The report is rendered in the page from the held result and saved as a
//!   download.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::report::build_report;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{fetch_prediction, now_utc, save_pdf, show_toast, REPORT_FAILED};
use super::messages::Msg;
use super::state::PredictionComponent;

pub fn update(
    component: &mut PredictionComponent,
    ctx: &Context<PredictionComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.session.set_field(field, value);
            true
        }
        Msg::Submit => {
            match component.session.begin_submit() {
                Ok(submission) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let id = submission.id;
                        match fetch_prediction(&submission.features).await {
                            Ok(label) => link.send_message(Msg::PredictionReceived(id, label)),
                            Err(details) => link.send_message(Msg::PredictionFailed(id, details)),
                        }
                    });
                }
                Err(blocked) => log!(format!("submit ignored: {}", blocked)),
            }
            true
        }
        Msg::PredictionReceived(id, label) => {
            if component.session.complete(id, label, now_utc()).is_some() {
                open_top_sheet(component.result_dialog_ref.clone());
                true
            } else {
                log!("discarding prediction for a request that is no longer pending");
                false
            }
        }
        Msg::PredictionFailed(id, details) => {
            error!(format!("prediction failed: {}", details));
            component.session.fail(id, details)
        }
        Msg::DownloadReport => {
            let Some(result) = component.session.begin_report() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                // Yield once so "Generating..." is painted before the render blocks.
                gloo_timers::future::TimeoutFuture::new(0).await;
                let outcome = build_report(&result)
                    .map_err(|e| e.to_string())
                    .and_then(|report| save_pdf(&report.bytes, &report.filename));
                link.send_message(Msg::ReportFinished(outcome));
            });
            true
        }
        Msg::ReportFinished(outcome) => {
            component.session.finish_report();
            if let Err(details) = outcome {
                error!(format!("report failed: {}", details));
                show_toast(REPORT_FAILED);
            }
            true
        }
        Msg::CloseResult => {
            if component.session.dismiss_result() {
                close_top_sheet(component.result_dialog_ref.clone());
                true
            } else {
                false
            }
        }
        Msg::PredictAnother => {
            close_top_sheet(component.result_dialog_ref.clone());
            component.session.reset();
            true
        }
    }
}

use crate::components::prediction::messages::Msg::{CloseResult, DownloadReport, PredictAnother};
use crate::components::prediction::PredictionComponent;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::session::Phase;
use yew::html::Scope;
use yew::prelude::*;

pub fn result_dialog(component: &PredictionComponent, link: &Scope<PredictionComponent>) -> Html {
    let session = &component.session;
    let body = match session.result() {
        Some(result) => {
            let churn = result.prediction.is_churn();
            let generating = session.phase() == Phase::GeneratingReport;
            let (tone, title, headline, advice) = if churn {
                (
                    "tone-churn",
                    "Churn Risk Detected",
                    "This customer is likely to churn",
                    "We recommend taking immediate action to retain this customer. Consider special offers or personalized outreach.",
                )
            } else {
                (
                    "tone-retain",
                    "Customer Likely to Stay",
                    "This customer is unlikely to churn",
                    "This customer shows strong loyalty indicators. Continue providing excellent service to maintain satisfaction.",
                )
            };

            html! {
                <div class={classes!("result-dialog", tone)} role="dialog" aria-modal="true">
                    <div class="result-header">
                        <h2>{ title }</h2>
                        <button
                            class="result-close"
                            aria-label="Close"
                            disabled={generating}
                            onclick={link.callback(|_| CloseResult)}
                        >
                            {"×"}
                        </button>
                    </div>
                    <div class="result-body">
                        <div class="result-customer">{ result.customer_name.clone() }</div>
                        <div class="result-verdict">
                            <p class="result-headline">{ headline }</p>
                            <p>{ advice }</p>
                        </div>
                        <div class="result-timestamp">
                            { format!("Prediction made on: {}", result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")) }
                        </div>
                        <div class="result-actions">
                            <button
                                class="btn btn-outline"
                                disabled={generating}
                                onclick={link.callback(|_| DownloadReport)}
                            >
                                { if generating { "Generating..." } else { "Download Report" } }
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled={generating}
                                onclick={link.callback(|_| PredictAnother)}
                            >
                                {"Predict Another"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <YwMaterialTopSheet node_ref={component.result_dialog_ref.clone()}>
            <div class="backdrop">{ body }</div>
        </YwMaterialTopSheet>
    }
}

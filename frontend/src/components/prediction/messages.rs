use common::model::PredictionLabel;
use common::validation::FormField;

#[derive(Clone)]
pub enum Msg {
    SetField(FormField, String),
    Submit,
    /// Outcome of the request with the given submission id.
    PredictionReceived(u64, PredictionLabel),
    PredictionFailed(u64, String),
    DownloadReport,
    ReportFinished(Result<(), String>),
    CloseResult,
    PredictAnother,
}

//! Submission lifecycle of the prediction page, independent of the UI toolkit.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ ResultShown ◀──▶ GeneratingReport
//!   ▲                  │                   │
//!   │                  └──error──▶ Failed ─┘ (retry submits again)
//!   └──────────────── reset ◀──────────────┘
//! ```
//!
//! Nothing here is shared across submissions: every `begin_submit` starts a
//! fresh pending request with its own id, and a response only lands when it
//! carries the id of the request still pending.

use crate::encoding::encode;
use crate::model::feature_vector::FeatureVector;
use crate::model::prediction::{PredictionLabel, PredictionResult};
use crate::validation::{FormField, FormState};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    ResultShown,
    GeneratingReport,
    Failed,
}

/// Why a submit was refused before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a prediction request is already in flight")]
    InFlight,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
}

/// Payload of one outgoing prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Echoed back by `complete`/`fail` to match the response to its request.
    pub id: u64,
    pub customer_name: String,
    pub features: FeatureVector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSession {
    form: FormState,
    phase: Phase,
    pending: Option<Submission>,
    next_id: u64,
    result: Option<PredictionResult>,
    error: Option<String>,
}

impl Default for SubmissionSession {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

impl SubmissionSession {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            phase: Phase::Idle,
            pending: None,
            next_id: 0,
            result: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Submit control state: enabled only for a valid form with nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.form.is_valid() && !matches!(self.phase, Phase::Submitting | Phase::GeneratingReport)
    }

    /// Field edits go through the session so validity stays current.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates and encodes the form, moving to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if matches!(self.phase, Phase::Submitting | Phase::GeneratingReport) {
            return Err(SubmitBlocked::InFlight);
        }
        let input = match self.form.validated() {
            Ok(input) => input,
            Err(errors) => {
                self.form.touch_all();
                return Err(SubmitBlocked::Invalid(errors.len()));
            }
        };
        self.next_id += 1;
        let submission = Submission {
            id: self.next_id,
            customer_name: input.customer_name.clone(),
            features: encode(&input),
        };
        self.pending = Some(submission.clone());
        self.error = None;
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    /// Lands a successful prediction for request `id`. Returns `None` when
    /// that request is no longer pending, e.g. the user reset the page and
    /// submitted again before the response arrived.
    pub fn complete(
        &mut self,
        id: u64,
        prediction: PredictionLabel,
        timestamp: DateTime<Utc>,
    ) -> Option<PredictionResult> {
        if !self.is_pending(id) {
            return None;
        }
        let Submission {
            customer_name,
            features,
            ..
        } = self.pending.take()?;
        let result = PredictionResult {
            customer_name,
            form_data: features,
            prediction,
            timestamp,
        };
        self.result = Some(result.clone());
        self.phase = Phase::ResultShown;
        Some(result)
    }

    /// Records the failure of request `id`. Ignored unless it is still pending.
    pub fn fail(&mut self, id: u64, message: impl Into<String>) -> bool {
        if !self.is_pending(id) {
            return false;
        }
        self.pending = None;
        self.error = Some(message.into());
        self.phase = Phase::Failed;
        true
    }

    fn is_pending(&self, id: u64) -> bool {
        self.phase == Phase::Submitting && self.pending.as_ref().is_some_and(|p| p.id == id)
    }

    pub fn begin_report(&mut self) -> Option<PredictionResult> {
        if self.phase != Phase::ResultShown {
            return None;
        }
        self.phase = Phase::GeneratingReport;
        self.result.clone()
    }

    pub fn finish_report(&mut self) {
        if self.phase == Phase::GeneratingReport {
            self.phase = Phase::ResultShown;
        }
    }

    /// Closes the result without starting over. Refused while a report is
    /// being generated.
    pub fn dismiss_result(&mut self) -> bool {
        if self.phase != Phase::ResultShown {
            return false;
        }
        self.phase = Phase::Idle;
        self.result = None;
        true
    }

    /// "Predict another": drops the result and any pending request. The form
    /// keeps its values so a similar customer can be entered quickly.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.pending = None;
        self.result = None;
        self.error = None;
    }
}

//! Component state for the prediction page.
//!
//! The form values, validation results, the pending request and the last
//! prediction all live in a single `SubmissionSession`; the component only
//! adds the DOM handle of the result dialog.

use common::session::SubmissionSession;
use yew::prelude::*;

/// Main state container for the `PredictionComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct PredictionComponent {
    /// Form, request and result lifecycle.
    pub session: SubmissionSession,

    /// Reference to the result dialog/top-sheet container node.
    pub result_dialog_ref: NodeRef,
}

impl PredictionComponent {
    /// Starts from the default form values with nothing submitted yet.
    pub fn new() -> Self {
        Self {
            session: SubmissionSession::default(),
            result_dialog_ref: NodeRef::default(),
        }
    }
}

//! Defines the properties for the `PredictionComponent`.

use yew::prelude::*;

/// Properties for the `PredictionComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct PredictionProps {
    /// Invoked by the "Back to Home" link. When absent the link is not rendered,
    /// which lets the page be mounted on its own.
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

//! Prediction page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `PredictionProps`, `PredictionComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Keep every lifecycle decision (can submit, which response lands, when the
//!   report may be requested) inside `common::session::SubmissionSession`.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PredictionProps;
pub use state::PredictionComponent;

impl Component for PredictionComponent {
    type Message = Msg;
    type Properties = PredictionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PredictionComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

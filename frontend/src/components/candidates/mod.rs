//! Candidate intake screen: root module wiring the Yew `Component`
//! implementation with submodules for the form controller, state, update
//! logic and view rendering.
//!
//! Responsibilities
//! - Re-export the types callers need (`Msg`, `CandidatesProps`,
//!   `CandidatesComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On creation, rebuild the candidate list from browser storage so
//!   previously added candidates survive page reloads.

use yew::prelude::*;

mod controller;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CandidatesProps;
pub use state::CandidatesComponent;

impl Component for CandidatesComponent {
    type Message = Msg;
    type Properties = CandidatesProps;

    fn create(ctx: &Context<Self>) -> Self {
        CandidatesComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

//! Update function for the candidates screen.
//!
//! Single Elm-style `update`: it receives the current state, the `Context`
//! and a `Msg`, mutates the state through the controller and returns whether
//! the view should re-render. The POST to the extraction service is the only
//! async edge; it is spawned here and its outcome comes back as
//! `Msg::SubmissionFinished`.

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CandidatesComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async outcomes).
/// - Returns `true` to re-render the view.
pub fn update(
    component: &mut CandidatesComponent,
    ctx: &Context<CandidatesComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateName(value) => {
            component.controller.name.set(value);
            true
        }
        Msg::UpdateSurname(value) => {
            component.controller.surname.set(value);
            true
        }
        Msg::FileSelected(file) => {
            if !component.controller.select_file(file) {
                // Rejected: the reference is already gone, blank the control
                // so the stale filename disappears too.
                component.clear_file_input();
            }
            true
        }
        Msg::Submit => {
            let Some(submission) = component.controller.begin_submission() else {
                // A guard failed and the controller has already alerted.
                return true;
            };
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = client
                    .submit(&submission.name, &submission.surname, &submission.file)
                    .await;
                link.send_message(Msg::SubmissionFinished(outcome));
            });
            true
        }
        Msg::SubmissionFinished(outcome) => {
            if let Err(err) = &outcome {
                error!("candidate submission failed:", err.to_string());
            }
            if component.controller.finish_submission(outcome) {
                component.clear_file_input();
            }
            true
        }
    }
}

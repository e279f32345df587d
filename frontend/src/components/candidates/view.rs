//! View rendering for the candidates screen.
//!
//! One form above the table of persisted candidates: two required text
//! inputs, an Excel-only file picker and a submit button. A required-field
//! hint appears under a field once it has been touched and left empty; the
//! submit button is disabled while a submission is in flight.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::candidate::Candidate;

use super::controller::RequiredField;
use super::messages::Msg;
use super::state::CandidatesComponent;

/// Main view function: the intake form above the persisted list.
pub fn view(component: &CandidatesComponent, ctx: &Context<CandidatesComponent>) -> Html {
    html! {
        <div class="candidates-screen">
            { build_form(component, ctx.link()) }
            { build_candidates_table(component.controller.candidates()) }
        </div>
    }
}

/// Builds the intake form. Submission goes through the form's `onsubmit` so
/// pressing Enter in a text field behaves like clicking the button.
fn build_form(component: &CandidatesComponent, link: &Scope<CandidatesComponent>) -> Html {
    let controller = &component.controller;
    let submitting = controller.is_submitting();

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });
    let oninput_name = link.callback(|event: InputEvent| {
        Msg::UpdateName(event.target_unchecked_into::<HtmlInputElement>().value())
    });
    let oninput_surname = link.callback(|event: InputEvent| {
        Msg::UpdateSurname(event.target_unchecked_into::<HtmlInputElement>().value())
    });
    // A change event without a file (picker cancelled) dispatches nothing.
    let onchange_file = link.batch_callback(|event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => vec![Msg::FileSelected(file)],
            None => vec![],
        }
    });

    html! {
        <form class="candidate-form" onsubmit={onsubmit}>
            <div class="form-field">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    value={controller.name.value().to_owned()}
                    oninput={oninput_name}
                />
                { build_field_hint(&controller.name) }
            </div>
            <div class="form-field">
                <label for="surname">{"Surname"}</label>
                <input
                    id="surname"
                    type="text"
                    value={controller.surname.value().to_owned()}
                    oninput={oninput_surname}
                />
                { build_field_hint(&controller.surname) }
            </div>
            <div class={classes!("form-field", controller.has_selected_file().then_some("has-file"))}>
                <label for="excel">{"Excel file"}</label>
                <input
                    id="excel"
                    type="file"
                    accept=".xls,.xlsx"
                    ref={component.file_input_ref.clone()}
                    onchange={onchange_file}
                />
            </div>
            <button type="submit" disabled={submitting}>
                { if submitting { "Submitting..." } else { "Add candidate" } }
            </button>
        </form>
    }
}

/// Inline hint under a required field, shown once it is touched and empty.
fn build_field_hint(field: &RequiredField) -> Html {
    if field.show_error() {
        html! { <span class="field-error">{"This field is required"}</span> }
    } else {
        html! {}
    }
}

/// Renders the persisted candidates, or an empty-state line.
fn build_candidates_table(candidates: &[Candidate]) -> Html {
    if candidates.is_empty() {
        return html! { <p class="empty-list">{"No candidates added yet."}</p> };
    }

    html! {
        <table class="candidates-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Surname"}</th>
                    <th>{"Seniority"}</th>
                    <th>{"Experience"}</th>
                    <th>{"Availability"}</th>
                </tr>
            </thead>
            <tbody>
                { for candidates.iter().map(build_candidate_row) }
            </tbody>
        </table>
    }
}

fn build_candidate_row(candidate: &Candidate) -> Html {
    html! {
        <tr>
            <td>{ candidate.name.clone() }</td>
            <td>{ candidate.surname.clone() }</td>
            <td>{ candidate.seniority.clone().unwrap_or_default() }</td>
            <td>{ candidate.experience.to_string() }</td>
            <td>{ candidate.availability.clone() }</td>
        </tr>
    }
}

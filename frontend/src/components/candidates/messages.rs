//! Defines the messages for the `CandidatesComponent`.

use common::model::extraction::ExtractedFields;

use crate::services::extraction::ExtractionError;

/// Messages used to update the state of the `CandidatesComponent`.
#[derive(Clone)]
pub enum Msg {
    /// The name input changed.
    UpdateName(String),
    /// The surname input changed.
    UpdateSurname(String),
    /// The user picked a file in the file input.
    FileSelected(web_sys::File),
    /// The form was submitted.
    Submit,
    /// The POST to the extraction service came back.
    SubmissionFinished(Result<Option<ExtractedFields>, ExtractionError>),
}

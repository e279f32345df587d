//! Decision core of the candidates screen.
//!
//! Everything the screen decides lives here behind plain data and two
//! injected collaborators: which files are acceptable, when a submission may
//! leave, what gets persisted and which alert fires. The Yew layer stays a
//! thin event adapter, so the whole workflow can be exercised in tests with
//! an in-memory store, a recording notifier and a fake file.

use std::rc::Rc;

use common::model::candidate::Candidate;
use common::model::extraction::ExtractedFields;

use crate::services::extraction::ExtractionError;
use crate::services::notify::Notifier;
use crate::services::storage::{PersistenceStore, CANDIDATES_KEY};

/// Alert shown when submission is attempted without a selected file.
pub const SELECT_FILE_MESSAGE: &str = "Please select a file.";
/// Alert shown when a required text field is empty at submission time.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill out all required fields.";
/// Alert shown when a picked file is not one of the two Excel types.
pub const INVALID_FILE_TYPE_MESSAGE: &str =
    "Invalid file type. Please select an Excel file (.xls or .xlsx).";
/// Alert shown after a candidate was extracted, appended and persisted.
pub const CANDIDATE_ADDED_MESSAGE: &str = "Candidate was added successfully";
/// Alert shown when the remote call fails for any reason.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Error adding a candidate";

/// The two media types the picker accepts: legacy `.xls` and OOXML `.xlsx`.
const EXCEL_MEDIA_TYPES: [&str; 2] = [
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Minimal view of a picked file: the declared media type drives the Excel
/// guard. Implemented by `web_sys::File` in the browser and by a fake in
/// tests.
pub trait UploadFile {
    fn media_type(&self) -> String;
}

/// One required text input: the current value plus whether the user has
/// interacted with it since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredField {
    value: String,
    touched: bool,
}

impl RequiredField {
    pub fn set(&mut self, value: String) {
        self.value = value;
        self.touched = true;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Required means non-empty. Whitespace is not trimmed.
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// Whether the view should render the inline required-field hint.
    pub fn show_error(&self) -> bool {
        self.touched && !self.is_valid()
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }
}

/// Everything the HTTP layer needs for one POST. Handed out by
/// [`CandidatesController::begin_submission`] once every guard has passed.
pub struct Submission<F> {
    pub name: String,
    pub surname: String,
    pub file: F,
}

/// Owns the form state, the in-memory candidate list and the fixed-key
/// mirror of that list in the persistence store.
pub struct CandidatesController<F> {
    pub name: RequiredField,
    pub surname: RequiredField,
    excel_file: Option<F>,
    candidates: Vec<Candidate>,
    /// Identity of the submission currently in flight. Doubles as the guard
    /// that keeps a second submission from racing the first.
    pending: Option<(String, String)>,
    store: Rc<dyn PersistenceStore>,
    notifier: Rc<dyn Notifier>,
}

impl<F: UploadFile + Clone> CandidatesController<F> {
    /// Creates the controller and immediately rebuilds the candidate list
    /// from the store; a missing entry yields an empty list.
    pub fn new(store: Rc<dyn PersistenceStore>, notifier: Rc<dyn Notifier>) -> Self {
        let mut controller = Self {
            name: RequiredField::default(),
            surname: RequiredField::default(),
            excel_file: None,
            candidates: Vec::new(),
            pending: None,
            store,
            notifier,
        };
        controller.load_candidates_from_storage();
        controller
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn has_selected_file(&self) -> bool {
        self.excel_file.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the in-memory list wholesale with whatever the store holds
    /// under the fixed key. Absent or unparsable values yield an empty list;
    /// the next successful save overwrites them.
    pub fn load_candidates_from_storage(&mut self) {
        self.candidates = self
            .store
            .get(CANDIDATES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
    }

    /// Mirrors the current list into the store as a whole-list overwrite.
    pub fn save_candidates_to_storage(&self) {
        if let Ok(json) = serde_json::to_string(&self.candidates) {
            self.store.set(CANDIDATES_KEY, &json);
        }
    }

    /// Applies the Excel guard to a picked file. Accepted files replace the
    /// stored reference and `true` comes back. Rejected files alert, force
    /// the reference to `None` and return `false` so the caller can blank
    /// the visual input as well.
    pub fn select_file(&mut self, file: F) -> bool {
        if EXCEL_MEDIA_TYPES.contains(&file.media_type().as_str()) {
            self.excel_file = Some(file);
            true
        } else {
            self.notifier.notify(INVALID_FILE_TYPE_MESSAGE);
            self.excel_file = None;
            false
        }
    }

    /// Runs the submission guards and returns the data for the POST only
    /// when all of them pass; no request exists otherwise.
    ///
    /// Guard order: an in-flight submission wins silently (the button is
    /// disabled anyway), then the missing-file alert, then the
    /// required-fields alert.
    pub fn begin_submission(&mut self) -> Option<Submission<F>> {
        if self.pending.is_some() {
            return None;
        }
        let Some(file) = self.excel_file.clone() else {
            self.notifier.notify(SELECT_FILE_MESSAGE);
            return None;
        };
        if !self.name.is_valid() || !self.surname.is_valid() {
            self.notifier.notify(REQUIRED_FIELDS_MESSAGE);
            return None;
        }

        let name = self.name.value().to_owned();
        let surname = self.surname.value().to_owned();
        self.pending = Some((name.clone(), surname.clone()));
        Some(Submission { name, surname, file })
    }

    /// Lands the outcome of the in-flight submission.
    ///
    /// Success appends a candidate built from the submitted identity (the
    /// fields may have been edited while the request was out), persists the
    /// whole list, alerts and resets the form; `true` tells the caller to
    /// blank the visual file input too. Failure alerts and leaves every
    /// field untouched so the user can retry. An outcome with nothing
    /// pending is ignored.
    pub fn finish_submission(
        &mut self,
        outcome: Result<Option<ExtractedFields>, ExtractionError>,
    ) -> bool {
        let Some((name, surname)) = self.pending.take() else {
            return false;
        };
        match outcome {
            Ok(extracted) => {
                self.candidates
                    .push(Candidate::from_extraction(name, surname, extracted));
                self.save_candidates_to_storage();
                self.notifier.notify(CANDIDATE_ADDED_MESSAGE);
                self.reset_form();
                true
            }
            Err(_) => {
                self.notifier.notify(SUBMISSION_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Clears both required fields back to pristine and drops the selected
    /// file reference. The visual file input is the caller's to clear.
    pub fn reset_form(&mut self) {
        self.name.reset();
        self.surname.reset();
        self.excel_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notify::RecordingNotifier;
    use crate::services::storage::MemoryStore;
    use common::model::candidate::Experience;

    const XLS: &str = "application/vnd.ms-excel";
    const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    #[derive(Clone)]
    struct FakeFile(&'static str);

    impl UploadFile for FakeFile {
        fn media_type(&self) -> String {
            self.0.to_owned()
        }
    }

    struct Harness {
        controller: CandidatesController<FakeFile>,
        store: Rc<MemoryStore>,
        notifier: Rc<RecordingNotifier>,
    }

    fn harness() -> Harness {
        harness_with_store(Rc::new(MemoryStore::default()))
    }

    fn harness_with_store(store: Rc<MemoryStore>) -> Harness {
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = CandidatesController::new(store.clone(), notifier.clone());
        Harness {
            controller,
            store,
            notifier,
        }
    }

    fn fill_valid_form(controller: &mut CandidatesController<FakeFile>) {
        controller.name.set("John".to_owned());
        controller.surname.set("Doe".to_owned());
        assert!(controller.select_file(FakeFile(XLSX)));
    }

    fn junior_fields() -> ExtractedFields {
        ExtractedFields {
            seniority: Some("Junior".to_owned()),
            experience: Some(Experience::Years(2.into())),
            availability: Some("False".to_owned()),
        }
    }

    fn alerts(harness: &Harness) -> Vec<String> {
        harness.notifier.messages.borrow().clone()
    }

    #[test]
    fn starts_empty_when_the_store_has_no_entry() {
        let h = harness();
        assert!(h.controller.candidates().is_empty());
        assert!(!h.controller.is_submitting());
        assert!(!h.controller.has_selected_file());
    }

    #[test]
    fn loads_persisted_candidates_on_creation() {
        let store = Rc::new(MemoryStore::default());
        store.set(
            CANDIDATES_KEY,
            r#"[{"name":"John","surname":"Doe","seniority":"Junior","experience":2,"availability":true}]"#,
        );
        let h = harness_with_store(store);
        assert_eq!(h.controller.candidates().len(), 1);
        assert_eq!(h.controller.candidates()[0].name, "John");
        assert_eq!(h.controller.candidates()[0].availability, "true");
    }

    #[test]
    fn unparsable_stored_value_yields_an_empty_list() {
        let store = Rc::new(MemoryStore::default());
        store.set(CANDIDATES_KEY, "definitely not json");
        let h = harness_with_store(store);
        assert!(h.controller.candidates().is_empty());
    }

    #[test]
    fn accepts_both_excel_media_types() {
        let mut h = harness();
        assert!(h.controller.select_file(FakeFile(XLS)));
        assert!(h.controller.has_selected_file());
        assert!(h.controller.select_file(FakeFile(XLSX)));
        assert!(h.controller.has_selected_file());
        assert!(alerts(&h).is_empty());
    }

    #[test]
    fn rejects_other_media_types_with_exactly_one_alert() {
        let mut h = harness();
        assert!(h.controller.select_file(FakeFile(XLSX)));

        // Picking a plain-text file afterwards must also drop the earlier
        // valid selection.
        assert!(!h.controller.select_file(FakeFile("text/plain")));
        assert!(!h.controller.has_selected_file());
        assert_eq!(alerts(&h), [INVALID_FILE_TYPE_MESSAGE]);
    }

    #[test]
    fn submission_without_a_file_never_builds_a_request() {
        let mut h = harness();
        h.controller.name.set("John".to_owned());
        h.controller.surname.set("Doe".to_owned());

        assert!(h.controller.begin_submission().is_none());
        assert_eq!(alerts(&h), [SELECT_FILE_MESSAGE]);
        assert!(!h.controller.is_submitting());
    }

    #[test]
    fn submission_with_an_empty_required_field_never_builds_a_request() {
        let mut h = harness();
        h.controller.name.set("John".to_owned());
        assert!(h.controller.select_file(FakeFile(XLS)));

        assert!(h.controller.begin_submission().is_none());
        assert_eq!(alerts(&h), [REQUIRED_FIELDS_MESSAGE]);
        assert!(!h.controller.is_submitting());
    }

    #[test]
    fn missing_file_is_reported_before_missing_fields() {
        let mut h = harness();
        assert!(h.controller.begin_submission().is_none());
        assert_eq!(alerts(&h), [SELECT_FILE_MESSAGE]);
    }

    #[test]
    fn successful_submission_appends_persists_alerts_and_resets() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);

        let submission = h.controller.begin_submission().expect("guards passed");
        assert_eq!(submission.name, "John");
        assert_eq!(submission.surname, "Doe");
        assert!(h.controller.is_submitting());

        assert!(h.controller.finish_submission(Ok(Some(junior_fields()))));

        let expected = Candidate {
            name: "John".to_owned(),
            surname: "Doe".to_owned(),
            seniority: Some("Junior".to_owned()),
            experience: Experience::Years(2.into()),
            availability: "False".to_owned(),
        };
        assert_eq!(h.controller.candidates(), [expected]);

        // The store mirrors the whole list.
        let stored: Vec<Candidate> =
            serde_json::from_str(&h.store.get(CANDIDATES_KEY).expect("list was persisted"))
                .expect("persisted list parses");
        assert_eq!(stored, h.controller.candidates());

        assert_eq!(alerts(&h), [CANDIDATE_ADDED_MESSAGE]);
        assert_eq!(h.controller.name.value(), "");
        assert_eq!(h.controller.surname.value(), "");
        assert!(!h.controller.name.show_error());
        assert!(!h.controller.has_selected_file());
        assert!(!h.controller.is_submitting());
    }

    #[test]
    fn failed_submission_preserves_the_form_for_retry() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);
        h.controller.begin_submission().expect("guards passed");

        assert!(!h
            .controller
            .finish_submission(Err(ExtractionError::Status(500))));

        assert!(h.controller.candidates().is_empty());
        assert!(h.store.get(CANDIDATES_KEY).is_none());
        assert_eq!(alerts(&h), [SUBMISSION_FAILED_MESSAGE]);

        // Everything is still in place for an immediate retry.
        assert_eq!(h.controller.name.value(), "John");
        assert!(h.controller.has_selected_file());
        assert!(!h.controller.is_submitting());
        assert!(h.controller.begin_submission().is_some());
    }

    #[test]
    fn empty_extraction_still_adds_a_default_candidate() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);
        h.controller.begin_submission().expect("guards passed");

        assert!(h.controller.finish_submission(Ok(None)));

        let candidate = &h.controller.candidates()[0];
        assert_eq!(candidate.name, "John");
        assert_eq!(candidate.seniority, None);
        assert_eq!(candidate.experience, Experience::default());
        assert_eq!(candidate.availability, "");
        assert_eq!(alerts(&h), [CANDIDATE_ADDED_MESSAGE]);
    }

    #[test]
    fn a_second_submission_is_blocked_silently_while_one_is_in_flight() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);
        assert!(h.controller.begin_submission().is_some());

        assert!(h.controller.begin_submission().is_none());
        assert!(alerts(&h).is_empty());
    }

    #[test]
    fn the_submitted_identity_wins_over_later_edits() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);
        h.controller.begin_submission().expect("guards passed");

        // The user keeps typing while the request is out.
        h.controller.name.set("Edited".to_owned());

        assert!(h.controller.finish_submission(Ok(None)));
        assert_eq!(h.controller.candidates()[0].name, "John");
    }

    #[test]
    fn an_outcome_without_a_pending_submission_is_ignored() {
        let mut h = harness();
        assert!(!h.controller.finish_submission(Ok(Some(junior_fields()))));
        assert!(h.controller.candidates().is_empty());
        assert!(alerts(&h).is_empty());
    }

    #[test]
    fn a_fresh_controller_sees_what_the_previous_one_persisted() {
        let mut h = harness();
        fill_valid_form(&mut h.controller);
        h.controller.begin_submission().expect("guards passed");
        assert!(h.controller.finish_submission(Ok(Some(junior_fields()))));

        let reloaded = harness_with_store(h.store.clone());
        assert_eq!(reloaded.controller.candidates(), h.controller.candidates());
    }
}

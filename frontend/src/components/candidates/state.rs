//! Component state for the candidates screen.

use std::rc::Rc;

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::controller::{CandidatesController, UploadFile};
use super::props::CandidatesProps;
use crate::services::extraction::{default_api_url, ExtractionClient};
use crate::services::notify::BrowserNotifier;
use crate::services::storage::BrowserStore;

impl UploadFile for File {
    fn media_type(&self) -> String {
        self.type_()
    }
}

/// State container for the `CandidatesComponent`.
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct CandidatesComponent {
    /// The decision core: form fields, candidate list, persistence mirror.
    pub controller: CandidatesController<File>,
    /// HTTP client for the extraction endpoint.
    pub client: ExtractionClient,
    /// Reference to the `<input type="file">` node, so rejection and reset
    /// can blank its displayed value.
    pub file_input_ref: NodeRef,
}

impl CandidatesComponent {
    /// Wires the browser collaborators (localStorage, `window.alert`) into a
    /// fresh controller; loading the persisted list happens inside
    /// [`CandidatesController::new`].
    pub fn new(props: &CandidatesProps) -> Self {
        let api_url = props.api_url.clone().unwrap_or_else(default_api_url);
        Self {
            controller: CandidatesController::new(Rc::new(BrowserStore), Rc::new(BrowserNotifier)),
            client: ExtractionClient::new(api_url),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Blanks the file input's displayed value. The stored reference lives
    /// in the controller; this only touches the DOM side.
    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

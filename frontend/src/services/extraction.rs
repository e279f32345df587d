//! HTTP client for the remote extraction service.
//!
//! Submissions are POSTed as `multipart/form-data` with three parts, `name`,
//! `surname` and `excel` (the spreadsheet), to a single configurable
//! endpoint. The browser derives the content type and boundary from the
//! `FormData` body; setting the header by hand would lose the boundary.

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::model::extraction::{ExtractedFields, ExtractionResponse};

/// Endpoint used when neither the component prop nor the build environment
/// provides one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/candidates";

/// Resolves the extraction endpoint for this build: the `CANDIDATES_API_URL`
/// compile-time variable wins over the default.
pub fn default_api_url() -> String {
    option_env!("CANDIDATES_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_owned()
}

/// Why a submission failed. Every variant surfaces to the user as the same
/// fixed alert; the distinction only feeds console diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("request could not be completed: {0}")]
    Network(String),
    #[error("extraction service answered with status {0}")]
    Status(u16),
    #[error("malformed extraction response: {0}")]
    Decode(String),
}

/// The one HTTP capability of the candidates screen.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    api_url: String,
}

impl ExtractionClient {
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }

    /// POSTs the submission and returns the first element of the response's
    /// `extractedData`, or `None` when the service extracted nothing.
    /// Network failures, non-2xx statuses and bodies that do not match the
    /// documented envelope all come back as [`ExtractionError`].
    pub async fn submit(
        &self,
        name: &str,
        surname: &str,
        excel: &web_sys::File,
    ) -> Result<Option<ExtractedFields>, ExtractionError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_str("name", name).map_err(js_error)?;
        form.append_with_str("surname", surname).map_err(js_error)?;
        // The File carries its original filename into the multipart part.
        form.append_with_blob("excel", excel).map_err(js_error)?;

        let response = Request::post(&self.api_url)
            .body(form)
            .map_err(|err| ExtractionError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ExtractionError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(ExtractionError::Status(response.status()));
        }

        let body: ExtractionResponse = response
            .json()
            .await
            .map_err(|err| ExtractionError::Decode(err.to_string()))?;

        Ok(body.data.extracted_data.into_iter().next())
    }
}

fn js_error(err: JsValue) -> ExtractionError {
    ExtractionError::Network(format!("{err:?}"))
}

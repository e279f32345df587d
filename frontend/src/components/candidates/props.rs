//! Defines the properties for the `CandidatesComponent`.

use yew::prelude::*;

/// Properties for the `CandidatesComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct CandidatesProps {
    /// Optional override for the extraction-service endpoint.
    ///
    /// - If `Some(url)`, submissions POST to `url`.
    /// - If `None` (the default), the endpoint comes from the
    ///   `CANDIDATES_API_URL` compile-time variable, falling back to
    ///   `http://localhost:3000/candidates`.
    #[prop_or_default]
    pub api_url: Option<String>,
}

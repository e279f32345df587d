use serde::{Deserialize, Serialize};

use crate::model::candidate::{Experience, availability};

/// Success envelope returned by the extraction service.
///
/// The wire shape is `{ "data": { "extractedData": [ { ... } ] } }`; only the
/// first `extractedData` element is ever consumed. Both envelope keys are
/// required, so a body without them is a malformed response. Every field on
/// the extracted objects themselves is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub data: ExtractionPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionPayload {
    #[serde(rename = "extractedData")]
    pub extracted_data: Vec<ExtractedFields>,
}

/// One element of `extractedData`. Field names follow the service's
/// PascalCase JSON; anything it sends beyond these three is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(rename = "Seniority", default)]
    pub seniority: Option<String>,
    #[serde(rename = "Experience", default)]
    pub experience: Option<Experience>,
    #[serde(
        rename = "Availability",
        default,
        deserialize_with = "availability::opt_string_or_bool"
    )]
    pub availability: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_success_body() {
        let body = r#"{"data":{"extractedData":[{"Seniority":"Junior","Experience":2,"Availability":"False"}]}}"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();

        let first = &response.data.extracted_data[0];
        assert_eq!(first.seniority.as_deref(), Some("Junior"));
        assert_eq!(first.experience, Some(Experience::Years(2.into())));
        assert_eq!(first.availability.as_deref(), Some("False"));
    }

    #[test]
    fn extra_fields_on_the_extracted_object_are_ignored() {
        let body = r#"{"data":{"extractedData":[{"Seniority":"Senior","Education":"PhD","Score":99}]}}"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();

        let first = &response.data.extracted_data[0];
        assert_eq!(first.seniority.as_deref(), Some("Senior"));
        assert_eq!(first.experience, None);
        assert_eq!(first.availability, None);
    }

    #[test]
    fn empty_extracted_data_is_a_valid_response() {
        let body = r#"{"data":{"extractedData":[]}}"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();
        assert!(response.data.extracted_data.is_empty());
    }

    #[test]
    fn missing_envelope_keys_fail_to_parse() {
        assert!(serde_json::from_str::<ExtractionResponse>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<ExtractionResponse>(r#"{"data":{}}"#).is_err());
    }

    #[test]
    fn boolean_availability_is_coerced() {
        let body = r#"{"data":{"extractedData":[{"Availability":true}]}}"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.extracted_data[0].availability.as_deref(), Some("true"));
    }

    #[test]
    fn textual_experience_is_preserved() {
        let body = r#"{"data":{"extractedData":[{"Experience":"5+ years"}]}}"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.data.extracted_data[0].experience,
            Some(Experience::Text("5+ years".to_owned()))
        );
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::extraction::ExtractedFields;

/// A job applicant plus the attributes the extraction service pulled out of
/// the uploaded spreadsheet.
///
/// Candidates come into existence in exactly two ways: deserialized verbatim
/// from the browser persistence store, or built by
/// [`Candidate::from_extraction`] after a successful submission. There is no
/// identifier field; records are distinguished only by their position in the
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub surname: String,
    /// Extracted seniority label, e.g. `"Junior"`. `None` when the service
    /// did not report one.
    #[serde(default)]
    pub seniority: Option<String>,
    /// Backend-defined: a number of years or free text.
    #[serde(default)]
    pub experience: Experience,
    /// Canonically a string. Older stored lists may carry a boolean here;
    /// see [`availability`] for the coercion rule.
    #[serde(default, deserialize_with = "availability::string_or_bool")]
    pub availability: String,
}

impl Candidate {
    /// Builds the record appended after a successful submission: the
    /// submitted identity plus the first extracted element. Every field the
    /// service omitted falls back to its default (`None`, empty text, `""`),
    /// including the case where `extractedData` came back empty.
    pub fn from_extraction(
        name: String,
        surname: String,
        extracted: Option<ExtractedFields>,
    ) -> Self {
        let extracted = extracted.unwrap_or_default();
        Candidate {
            name,
            surname,
            seniority: extracted.seniority,
            experience: extracted.experience.unwrap_or_default(),
            availability: extracted.availability.unwrap_or_default(),
        }
    }
}

/// Experience as reported by the extraction service: usually a number of
/// years, but the backend is free to send text instead. The numeric arm keeps
/// the raw [`serde_json::Number`] so an integer survives re-serialization as
/// an integer rather than `2.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Years(serde_json::Number),
    Text(String),
}

impl Default for Experience {
    fn default() -> Self {
        Experience::Text(String::new())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(years) => fmt::Display::fmt(years, f),
            Experience::Text(text) => f.write_str(text),
        }
    }
}

/// Serde helpers coercing the wire's string-or-boolean availability into the
/// canonical `String` representation.
///
/// Booleans become `"true"`/`"false"`; strings pass through verbatim, so the
/// service's literal `"False"` stays `"False"`. `null` collapses to the field
/// default, same as an absent key.
pub mod availability {
    use std::fmt;

    use serde::de::{Deserializer, Error, Visitor};

    struct StringOrBool;

    impl<'de> Visitor<'de> for StringOrBool {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a boolean")
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_owned()))
        }

        fn visit_bool<E: Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Some(if value { "true" } else { "false" }.to_owned()))
        }

        fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(StringOrBool)
        }
    }

    /// For `Option<String>` fields: a present-but-`null` value yields `None`.
    pub fn opt_string_or_bool<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringOrBool)
    }

    /// For `String` fields: anything null-ish yields the empty string.
    pub fn string_or_bool<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        opt_string_or_bool(deserializer).map(Option::unwrap_or_default)
    }
}

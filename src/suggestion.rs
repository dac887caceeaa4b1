//! Suggestion module
//!
//! Data model for lookup results and the list the UI renders from them.

mod list;
pub mod suggestion_render;

use std::fmt;

use serde::Deserialize;
use serde_json::Number;

use crate::error::SuggestError;

pub use list::SuggestionList;

/// Identifier of a suggestion, as sent by the search endpoint
///
/// Numeric ids keep the JSON number as sent, so floats and ids beyond the
/// `i64` range are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(Number),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{}", n),
            SuggestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SuggestionId {
    fn from(n: i64) -> Self {
        SuggestionId::Number(n.into())
    }
}

impl From<&str> for SuggestionId {
    fn from(s: &str) -> Self {
        SuggestionId::Text(s.to_string())
    }
}

/// A single candidate shown under the search box
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub name: String,
}

impl Suggestion {
    pub fn new(id: impl Into<SuggestionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Decode a search response body
///
/// The body must be a JSON array of objects carrying at least `id` and
/// `name`; any other fields are ignored.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, SuggestError> {
    serde_json::from_str(body).map_err(|e| SuggestError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;

use thiserror::Error;

/// Custom error types for suggestbox
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Transport failure while talking to the search endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Search endpoint answered with a non-success status
    #[error("Search endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// Response body was not a list of suggestions
    #[error("Invalid response body: {0}")]
    Parse(String),

    /// Configuration file could not be used
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SuggestError {
    fn from(err: std::io::Error) -> Self {
        SuggestError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SuggestError::Status {
                code: status.as_u16(),
            },
            None if err.is_decode() => SuggestError::Parse(err.to_string()),
            None => SuggestError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

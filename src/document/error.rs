//! Document shape errors
//!
//! Raised when a configuration document does not have the shape the
//! accessor relies on. Everything else in the document is opaque and can
//! never produce one of these.

use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("Configuration document must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Invalid field '{path}': expected {expected}")]
    InvalidField { path: String, expected: &'static str },
}

impl DocumentError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            path: path.into(),
            expected,
        }
    }
}

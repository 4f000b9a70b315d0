//! Error types for lifepath-core

use crate::Resource;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("{resource} out of bounds: {value} not in [{min}, {max}]")]
    OutOfBounds {
        resource: Resource,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A rejected field in a generated list of decision options
///
/// `field` is a path into the response, e.g. `options[1].results[0].currency`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for the given field path
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

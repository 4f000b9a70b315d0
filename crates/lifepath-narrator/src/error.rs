//! Error types for lifepath-narrator
//!
//! These errors stay inside the crate's fallback policy: public narrator
//! operations log them and return fallback content instead.

use lifepath_core::ValidationError;
use thiserror::Error;

/// Why the text-generation collaborator could not be used
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// No answer within the configured timeout
    #[error("collaborator timed out")]
    Timeout,

    /// Transport failure, missing credentials or a non-success status
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// The answer could not be parsed
    #[error("malformed collaborator response: {0}")]
    Malformed(String),

    /// The answer parsed but broke the decision-option contract
    #[error("collaborator response rejected: {0}")]
    Rejected(#[from] ValidationError),
}

impl CollaboratorError {
    /// Whether asking again could help
    ///
    /// Only bad answers are retried; a generator that timed out or is
    /// unreachable gets no second attempt within the same call.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CollaboratorError::Malformed(_) | CollaboratorError::Rejected(_)
        )
    }
}

impl From<lifepath_core::Error> for CollaboratorError {
    fn from(err: lifepath_core::Error) -> Self {
        match err {
            lifepath_core::Error::Validation(v) => CollaboratorError::Rejected(v),
            other => CollaboratorError::Malformed(other.to_string()),
        }
    }
}

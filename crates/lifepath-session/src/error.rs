//! Error types for lifepath-session

use lifepath_core::SessionId;
use thiserror::Error;

/// Result type for lifepath-session operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lifepath-session
#[derive(Debug, Error)]
pub enum Error {
    /// No session with this ID is open
    #[error("{0} not found")]
    SessionNotFound(SessionId),

    /// Session configuration could not be parsed
    #[error("invalid session config: {0}")]
    Config(#[from] ron::error::SpannedError),
}

// Sessions may be driven from async request handlers on any thread.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}

//! Session domain errors

use thiserror::Error;

/// Errors that can occur in the session domain
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login submitted with an empty email or password
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// A pending login was cancelled before it completed
    #[error("Login cancelled before completion")]
    Cancelled,

    /// The session store could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// Creates a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }

    /// Returns true for the validation case that blocks submission
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::MissingCredentials(_))
    }
}

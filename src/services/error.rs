//! Failures reported by the event store and auth collaborators.
//!
//! The `Display` text of every variant is what the user sees in the error
//! notification, so messages are phrased for people rather than logs.

use thiserror::Error;

use crate::models::event::EventId;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Event {0} was not found")]
    NotFound(EventId),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("You must be signed in to do that")]
    Unauthenticated,
}

impl BackendError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        BackendError::Decode(err.to_string())
    }
}

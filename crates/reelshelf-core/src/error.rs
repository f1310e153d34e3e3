//! Error types for the catalogue engine.
//!
//! - [`ValidationError`] - client-side checks that block an action before any request
//! - [`FetchError`] - transport and HTTP failures from the remote API
//! - [`StorageError`] - preference store write failures (logged, never surfaced)
//! - [`ActionError`] - what the async command drivers return

use thiserror::Error;

/// Client-side rejection of a user action. No request has been made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select movies first")]
    EmptySelection,
    #[error("Choose a field to apply")]
    NoFieldsChosen,
    #[error("Enter a collection name")]
    NoCollectionName,
    #[error("Enter a title")]
    EmptyTitle,
}

impl ValidationError {
    /// Short heading used when the error is shown as a notice.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::EmptySelection => "No selection",
            Self::NoFieldsChosen => "No changes",
            Self::NoCollectionName => "No collection",
            Self::EmptyTitle => "No title",
        }
    }
}

/// How a failed request is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Server,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Server => "Server error",
        }
    }
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never produced a response (DNS, CORS, connection reset)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response status
    #[error("HTTP error: {0}")]
    Server(u16),
    /// 2xx response whose body could not be read as the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Request could not be built (body serialization)
    #[error("failed to build request: {0}")]
    Request(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) | Self::Request(_) => FailureKind::Network,
            Self::Server(_) | Self::Decode(_) => FailureKind::Server,
        }
    }
}

/// Preference store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to write to localStorage")]
    WriteFailed,
}

/// Outcome of an async command that did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// User declined the confirmation prompt.
    #[error("cancelled")]
    Cancelled,
    /// The session, or the dialog the action belonged to, is gone.
    #[error("session closed")]
    Detached,
}

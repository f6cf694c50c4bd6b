//! Error types for todaytag.

use thiserror::Error;

use crate::constants::exit_code;
use crate::event::EventId;
use crate::outcome::Phase;

/// Failure of a single call to the calendar backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The backend answered, but with a non-success status.
    #[error("{status}: {body}")]
    Rejected { status: u16, body: String },

    /// No response at all (host unreachable, connection reset, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status returned by the backend, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Diagnostic body returned by the backend, if it answered.
    pub fn body(&self) -> Option<&str> {
        match self {
            RemoteError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type alias for backend calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that abort a whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("No credentials provided: environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("Could not query events for {phase}: {source}")]
    QueryFailure {
        phase: Phase,
        #[source]
        source: RemoteError,
    },
}

impl ReconcileError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ReconcileError::MissingCredential { .. } => exit_code::MISSING_CREDENTIAL,
            ReconcileError::QueryFailure {
                phase: Phase::ClearStale,
                ..
            } => exit_code::CLEAR_QUERY_FAILED,
            ReconcileError::QueryFailure {
                phase: Phase::ApplyToday,
                ..
            } => exit_code::APPLY_QUERY_FAILED,
        }
    }
}

/// A rejected category update for one event. Recorded, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not update categories of event {event_id}: {source}")]
pub struct MutationFailure {
    pub event_id: EventId,
    #[source]
    pub source: RemoteError,
}

//! Error types for the dayframe calendar core.

use thiserror::Error;

/// Errors that can occur in calendar operations.
///
/// `InvalidInstant`, `InvalidTimeFormat`, `InvalidRange` and `EmptyTitle` are
/// local validation errors: the form layer recovers them as inline messages
/// and they never reach the persistence collaborator. `NotAuthenticated` and
/// `Transport` classify collaborator-reported failures, surfaced verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Invalid instant: {0} is before the Unix epoch")]
    InvalidInstant(i64),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("End date must be on or after start date")]
    InvalidRange,

    #[error("Title cannot be empty")]
    EmptyTitle,

    /// Assigned by the transport glue when the collaborator reports an auth
    /// failure; the core never classifies messages itself (see
    /// `protocol::failure`).
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

impl CalendarError {
    /// Local errors block submission; collaborator errors leave the form
    /// editable for retry.
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            CalendarError::NotAuthenticated(_) | CalendarError::Transport(_)
        )
    }
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

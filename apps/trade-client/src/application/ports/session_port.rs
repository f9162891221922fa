//! Session Port (Driven Port)
//!
//! Outbound side of the FIX session collaborator.

use async_trait::async_trait;

use crate::domain::fix::{Message, SessionId, Tag};

/// Errors handing a message to the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransmitError {
    /// No session is logged on.
    #[error("Session not logged on")]
    NotLoggedOn,

    /// A header field needed to route the message is absent.
    #[error("Required header field missing ({0})")]
    MissingHeaderField(Tag),

    /// Header identity matches no configured session.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The session task has gone away.
    #[error("Session closed")]
    Closed,
}

/// Errors starting the session collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No sessions to start.
    #[error("No sessions configured")]
    NoSessions,

    /// Already started.
    #[error("Initiator already started")]
    AlreadyStarted,

    /// Startup failed.
    #[error("Session startup failed: {message}")]
    Startup {
        /// Error details.
        message: String,
    },
}

/// Port for sending application messages.
///
/// `send` validates locally and enqueues; it never waits on the counterparty.
pub trait SessionPort: Send + Sync {
    /// Hand a message to the session addressed by its header identity.
    fn send(&self, message: Message) -> Result<(), TransmitError>;
}

/// Port for the session lifecycle.
#[async_trait]
pub trait InitiatorPort: Send + Sync {
    /// Create and log on every configured session.
    async fn start(&self) -> Result<(), SessionError>;

    /// Log out every session and stop background work.
    async fn stop(&self);
}

//! Session Application Port (Driver Port)
//!
//! Callbacks the session collaborator invokes on the client. Inbound
//! callbacks may run on a different thread from the operator loop.

use crate::domain::fix::{Message, SessionId};

/// Session callback contract.
pub trait SessionApplication: Send + Sync {
    /// A session was created.
    fn on_create(&self, session_id: &SessionId);

    /// Logon completed.
    fn on_logon(&self, session_id: &SessionId);

    /// Session logged out or disconnected.
    fn on_logout(&self, session_id: &SessionId);

    /// Outbound session-layer message, before it is sent.
    fn to_admin(&self, message: &Message, session_id: &SessionId);

    /// Inbound session-layer message.
    fn from_admin(&self, message: &Message, session_id: &SessionId);

    /// Outbound application message, before it is sent.
    fn to_app(&self, message: &Message, session_id: &SessionId);

    /// Inbound application message.
    fn from_app(&self, message: &Message, session_id: &SessionId);
}

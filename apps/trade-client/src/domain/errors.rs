//! Domain errors.

use std::fmt;

use super::fix::ProtocolVersion;

/// Errors raised while turning an intent into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Intent fields are inconsistent with the order type or contract.
    InvariantViolation {
        /// Invariant description.
        invariant: String,
        /// Offending values.
        state: String,
    },

    /// The contract does not support the requested message.
    UnsupportedMessage {
        /// Contract version.
        version: ProtocolVersion,
        /// Requested MsgType.
        msg_type: &'static str,
    },
}

impl DomainError {
    /// Build an invariant violation.
    pub fn invariant(invariant: impl Into<String>, state: impl Into<String>) -> Self {
        Self::InvariantViolation {
            invariant: invariant.into(),
            state: state.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { invariant, state } => {
                write!(f, "Invariant violated: {invariant} ({state})")
            }
            Self::UnsupportedMessage { version, msg_type } => {
                write!(f, "MsgType {msg_type} is not supported for {version}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

//! Session identity.

use std::fmt;

use super::message::Message;
use super::tag::Tag;

/// Identifies a FIX session from the client's side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId {
    /// BeginString of the session.
    pub begin_string: String,
    /// Our CompID.
    pub sender_comp_id: String,
    /// Counterparty CompID.
    pub target_comp_id: String,
}

impl SessionId {
    /// Create a session identity.
    #[must_use]
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
        }
    }

    /// Identity of the session an outbound message is addressed to.
    ///
    /// Returns the first of BeginString, SenderCompID, TargetCompID that is
    /// missing from the header as the error.
    pub fn from_outbound(message: &Message) -> Result<Self, Tag> {
        let field = |tag: Tag| {
            message
                .header
                .get_string(tag)
                .map(str::to_string)
                .map_err(|_| tag)
        };

        Ok(Self {
            begin_string: field(Tag::BEGIN_STRING)?,
            sender_comp_id: field(Tag::SENDER_COMP_ID)?,
            target_comp_id: field(Tag::TARGET_COMP_ID)?,
        })
    }

    /// The same session seen from the counterparty.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            begin_string: self.begin_string.clone(),
            sender_comp_id: self.target_comp_id.clone(),
            target_comp_id: self.sender_comp_id.clone(),
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.begin_string, self.sender_comp_id, self.target_comp_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fix::{ProtocolVersion, msg_type};

    #[test]
    fn display_format() {
        let id = SessionId::new("FIX.4.2", "TW", "ISLD");
        assert_eq!(id.to_string(), "FIX.4.2:TW->ISLD");
        assert_eq!(id.reversed().to_string(), "FIX.4.2:ISLD->TW");
    }

    #[test]
    fn from_outbound_reads_header() {
        let mut message = Message::new(ProtocolVersion::Fix44, msg_type::NEW_ORDER_SINGLE);
        message
            .header
            .set_string(Tag::SENDER_COMP_ID, "TW")
            .set_string(Tag::TARGET_COMP_ID, "ISLD");

        assert_eq!(
            SessionId::from_outbound(&message),
            Ok(SessionId::new("FIX.4.4", "TW", "ISLD"))
        );
    }

    #[test]
    fn from_outbound_names_missing_tag() {
        let mut message = Message::new(ProtocolVersion::Fix44, msg_type::NEW_ORDER_SINGLE);
        message.header.set_string(Tag::SENDER_COMP_ID, "TW");

        assert_eq!(
            SessionId::from_outbound(&message),
            Err(Tag::TARGET_COMP_ID)
        );
    }
}

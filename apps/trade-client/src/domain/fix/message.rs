//! FIX message: header and body field maps.

use std::fmt;

use super::field_map::{FieldError, FieldMap};
use super::tag::Tag;
use super::version::ProtocolVersion;

/// Separator used when a message is rendered for display.
pub const DISPLAY_DELIMITER: char = '|';

/// MsgType values used by the client and its loopback counterparty.
pub mod msg_type {
    /// Heartbeat.
    pub const HEARTBEAT: &str = "0";
    /// Logout.
    pub const LOGOUT: &str = "5";
    /// Execution Report.
    pub const EXECUTION_REPORT: &str = "8";
    /// Logon.
    pub const LOGON: &str = "A";
    /// New Order - Single.
    pub const NEW_ORDER_SINGLE: &str = "D";
    /// Order Cancel Request.
    pub const ORDER_CANCEL_REQUEST: &str = "F";
    /// Market Data Request.
    pub const MARKET_DATA_REQUEST: &str = "V";
    /// Market Data - Snapshot/Full Refresh.
    pub const MARKET_DATA_SNAPSHOT: &str = "W";

    /// Whether a MsgType belongs to the session layer.
    #[must_use]
    pub fn is_admin(value: &str) -> bool {
        matches!(value, "0" | "1" | "2" | "3" | "4" | "5" | "A")
    }
}

/// A FIX message as seen by the application: header and body.
///
/// This is not a wire encoding; BodyLength, MsgSeqNum and CheckSum belong to
/// the session collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Standard header fields.
    pub header: FieldMap,
    /// Body fields.
    pub body: FieldMap,
}

impl Message {
    /// Create a message with BeginString, MsgType and, for FIXT.1.1,
    /// ApplVerID already in the header.
    #[must_use]
    pub fn new(version: ProtocolVersion, msg_type: &str) -> Self {
        let mut header = FieldMap::new();
        header
            .set_string(Tag::BEGIN_STRING, version.begin_string())
            .set_string(Tag::MSG_TYPE, msg_type);
        if let Some(appl_ver_id) = version.appl_ver_id() {
            header.set_string(Tag::APPL_VER_ID, appl_ver_id);
        }

        Self {
            header,
            body: FieldMap::new(),
        }
    }

    /// MsgType (tag 35).
    pub fn msg_type(&self) -> Result<&str, FieldError> {
        self.header.get_string(Tag::MSG_TYPE)
    }

    /// BeginString (tag 8).
    pub fn begin_string(&self) -> Result<&str, FieldError> {
        self.header.get_string(Tag::BEGIN_STRING)
    }

    /// Protocol version from the BeginString, if recognised.
    #[must_use]
    pub fn version(&self) -> Option<ProtocolVersion> {
        self.begin_string()
            .ok()
            .and_then(ProtocolVersion::from_begin_string)
    }

    /// Whether this is a session-layer message.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.msg_type().is_ok_and(msg_type::is_admin)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        self.header.write_pairs(f, DISPLAY_DELIMITER, &mut first)?;
        self.body.write_pairs(f, DISPLAY_DELIMITER, &mut first)
    }
}

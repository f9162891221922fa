//! FIX Protocol Vocabulary
//!
//! Tags, versions, field storage and the message type shared by the
//! builders, the dumper and the session adapter.

mod field_map;
mod message;
mod session_id;
mod tag;
mod timestamp;
mod version;

pub use field_map::{FieldError, FieldMap};
pub use message::{DISPLAY_DELIMITER, Message, msg_type};
pub use session_id::SessionId;
pub use tag::Tag;
pub use timestamp::{UTC_TIMESTAMP_FORMAT, format_utc_timestamp, parse_utc_timestamp};
pub use version::{APPL_VER_ID_FIX50, ProtocolVersion};

//! Trade client session callbacks.

use tracing::{debug, info, warn};

use super::console::Console;
use super::dumper::MessageDumper;
use crate::application::ports::SessionApplication;
use crate::domain::fix::{Message, SessionId};

/// Callback side of the client: logs session events, echoes outbound
/// application messages and dumps inbound ones.
#[derive(Debug, Clone)]
pub struct TradeClientApplication {
    console: Console,
    dumper: MessageDumper,
}

impl TradeClientApplication {
    /// Create the application over the shared console.
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self {
            dumper: MessageDumper::new(console.clone()),
            console,
        }
    }
}

impl SessionApplication for TradeClientApplication {
    fn on_create(&self, session_id: &SessionId) {
        info!(session = %session_id, "Session created");
    }

    fn on_logon(&self, session_id: &SessionId) {
        info!(session = %session_id, "Logon");
    }

    fn on_logout(&self, session_id: &SessionId) {
        info!(session = %session_id, "Logout");
    }

    fn to_admin(&self, message: &Message, session_id: &SessionId) {
        debug!(session = %session_id, message = %message, "Admin message out");
    }

    fn from_admin(&self, message: &Message, session_id: &SessionId) {
        debug!(session = %session_id, message = %message, "Admin message in");
    }

    fn to_app(&self, message: &Message, session_id: &SessionId) {
        info!(session = %session_id, msg_type = message.msg_type().unwrap_or_default(), "Sending");
        if let Err(e) = self.console.line(&format!("Sending {message}")) {
            warn!(error = %e, "Console write failed");
        }
    }

    fn from_app(&self, message: &Message, session_id: &SessionId) {
        info!(session = %session_id, msg_type = message.msg_type().unwrap_or_default(), "Received");
        if let Err(e) = self.dumper.dump(message) {
            warn!(error = %e, "Console write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fix::{ProtocolVersion, Tag, msg_type};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn to_app_echoes_and_from_app_dumps() {
        let capture = Capture::default();
        let app = TradeClientApplication::new(Console::new(capture.clone()));
        let session = SessionId::new("FIX.4.4", "TW", "ISLD");

        let mut order = Message::new(ProtocolVersion::Fix44, msg_type::NEW_ORDER_SINGLE);
        order.body.set_string(Tag::CL_ORD_ID, "ORD1");
        app.to_app(&order, &session);

        let mut report = Message::new(ProtocolVersion::Fix44, msg_type::EXECUTION_REPORT);
        report.body.set_string(Tag::CL_ORD_ID, "ORD1");
        app.from_app(&report, &session.reversed());

        app.on_logon(&session);
        app.to_admin(&Message::new(ProtocolVersion::Fix44, msg_type::LOGON), &session);

        let output = String::from_utf8(capture.0.lock().clone()).unwrap();
        assert_eq!(
            output,
            "Sending 8=FIX.4.4|35=D|11=ORD1\n\nFromApp: 8=FIX.4.4|35=8|11=ORD1\nas\n  MsgType: 8\n   11: ORD1\n"
        );
    }
}

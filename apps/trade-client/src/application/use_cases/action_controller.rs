//! Action Controller Use Case
//!
//! The operator loop: show the menu, dispatch the chosen action to the
//! builder for the selected version, gate sends on confirmation where the
//! action calls for it, and report recoverable errors on one line.

use std::io::BufRead;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ports::{SessionPort, SettingsLookup, TransmitError};
use crate::application::services::{
    ActionKind, BuildError, FieldPrompter, MessageBuilder, PromptError, VersionDispatcher,
};
use crate::domain::fix::ProtocolVersion;

/// How the protocol version is chosen for each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelection {
    /// Ask the operator with a BeginString menu.
    Prompt,
    /// Use this identifier for every action.
    Fixed(String),
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Operator chose Quit.
    Quit,
    /// Input could no longer be read.
    InputClosed,
}

/// Result of one pass through the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Message handed to the session.
    Sent,
    /// Operator declined the confirmation.
    NotConfirmed,
    /// No contract for the version; nothing was built.
    NothingBuilt,
    /// Empty input at the action prompt.
    Idle,
    /// Operator chose Quit.
    Quit,
}

/// Errors from a single action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Token at the action prompt is not on the menu.
    #[error("unknown action: '{0}'")]
    UnknownAction(String),

    /// Building the message failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A prompt outside the builder failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The session refused the message.
    #[error(transparent)]
    Transmit(#[from] TransmitError),
}

impl ActionError {
    /// Only input read failures end the loop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Build(err) => err.is_input_failure(),
            Self::Prompt(err) => err.is_input_failure(),
            Self::UnknownAction(_) | Self::Transmit(_) => false,
        }
    }
}

/// Operator loop over a session and its settings.
pub struct ActionController<S, C>
where
    S: SessionPort + ?Sized,
    C: SettingsLookup + ?Sized,
{
    session: Arc<S>,
    builder: MessageBuilder<C>,
    dispatcher: VersionDispatcher,
    selection: VersionSelection,
}

impl<S, C> ActionController<S, C>
where
    S: SessionPort + ?Sized,
    C: SettingsLookup + ?Sized,
{
    /// Create a new `ActionController`.
    pub fn new(session: Arc<S>, settings: Arc<C>, selection: VersionSelection) -> Self {
        Self {
            session,
            builder: MessageBuilder::new(settings),
            dispatcher: VersionDispatcher::default(),
            selection,
        }
    }

    /// Run until Quit or until input fails.
    pub fn run<R: BufRead>(&self, prompter: &mut FieldPrompter<R>) -> ExitReason {
        loop {
            match self.step(prompter) {
                Ok(ActionOutcome::Quit) => {
                    info!("Operator quit");
                    return ExitReason::Quit;
                }
                Ok(outcome) => debug!(?outcome, "Action complete"),
                Err(e) if e.is_fatal() => {
                    warn!(error = %e, "Input closed, leaving action loop");
                    return ExitReason::InputClosed;
                }
                Err(e) => {
                    info!(error = %e, "Action failed");
                    if prompter.console().line(&e.to_string()).is_err() {
                        return ExitReason::InputClosed;
                    }
                }
            }
        }
    }

    /// Read one action and carry it out.
    ///
    /// # Errors
    ///
    /// Any [`ActionError`]; check [`ActionError::is_fatal`] to decide
    /// whether to continue.
    pub fn step<R: BufRead>(
        &self,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<ActionOutcome, ActionError> {
        let token = prompter.query_action()?;
        let kind = match token.as_str() {
            "" => return Ok(ActionOutcome::Idle),
            "1" => ActionKind::EnterOrder,
            "2" => ActionKind::CancelOrder,
            "3" => ActionKind::MarketDataTest,
            "4" => return Ok(ActionOutcome::Quit),
            _ => return Err(ActionError::UnknownAction(token)),
        };

        self.perform(kind, prompter)
    }

    fn perform<R: BufRead>(
        &self,
        kind: ActionKind,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<ActionOutcome, ActionError> {
        let begin_string = self.select_version(prompter)?;
        info!(action = %kind, begin_string = %begin_string, "Action selected");

        let Some(contract) = self.dispatcher.resolve(kind, &begin_string)? else {
            return Ok(ActionOutcome::NothingBuilt);
        };
        let message = self.builder.build(kind, contract, prompter)?;

        let confirmed = match kind {
            ActionKind::EnterOrder => true,
            ActionKind::CancelOrder => prompter.query_confirm("Send Cancel")?,
            ActionKind::MarketDataTest => prompter.query_confirm("Send MarketDataRequest")?,
        };
        if !confirmed {
            info!(action = %kind, "Send declined");
            return Ok(ActionOutcome::NotConfirmed);
        }

        self.session.send(message)?;
        Ok(ActionOutcome::Sent)
    }

    fn select_version<R: BufRead>(
        &self,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<String, PromptError> {
        match &self.selection {
            VersionSelection::Fixed(identifier) => Ok(identifier.clone()),
            VersionSelection::Prompt => {
                let labels: Vec<_> = ProtocolVersion::ALL.iter().map(|v| v.menu_label()).collect();
                let values: Vec<_> = ProtocolVersion::ALL
                    .iter()
                    .map(|v| v.begin_string())
                    .collect();
                prompter.query_choice("BeginString", &labels, Some(values.as_slice()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::Console;
    use crate::domain::fix::{Message, Tag};
    use parking_lot::Mutex;
    use std::io::{self, Cursor, Write};

    #[derive(Default)]
    struct RecordingSession {
        sent: Mutex<Vec<Message>>,
        reject: bool,
    }

    impl SessionPort for RecordingSession {
        fn send(&self, message: Message) -> Result<(), TransmitError> {
            if self.reject {
                return Err(TransmitError::NotLoggedOn);
            }
            self.sent.lock().push(message);
            Ok(())
        }
    }

    struct Settings;

    impl SettingsLookup for Settings {
        fn global_setting(&self, key: &str) -> Option<&str> {
            match key {
                "SenderCompID" => Some("TW"),
                "TargetCompID" => Some("ISLD"),
                _ => None,
            }
        }
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(
        session: &Arc<RecordingSession>,
        selection: VersionSelection,
        lines: &[&str],
    ) -> (ExitReason, String) {
        let capture = Capture::default();
        let mut input = lines.join("\n");
        input.push('\n');
        let mut prompter =
            FieldPrompter::new(Cursor::new(input.into_bytes()), Console::new(capture.clone()));
        let controller = ActionController::new(Arc::clone(session), Arc::new(Settings), selection);
        (controller.run(&mut prompter), capture.text())
    }

    fn fixed(id: &str) -> VersionSelection {
        VersionSelection::Fixed(id.to_string())
    }

    #[test]
    fn quit_sends_nothing() {
        let session = Arc::new(RecordingSession::default());
        let (exit, _) = run(&session, VersionSelection::Prompt, &["4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(session.sent.lock().is_empty());
    }

    #[test]
    fn end_of_input_closes_loop() {
        let session = Arc::new(RecordingSession::default());
        let (exit, _) = run(&session, VersionSelection::Prompt, &["1", "3"]);

        // Version menu answered, then input runs out at ClOrdID.
        assert_eq!(exit, ExitReason::InputClosed);
        assert!(session.sent.lock().is_empty());
    }

    #[test]
    fn unknown_action_is_reported_and_loop_continues() {
        let session = Arc::new(RecordingSession::default());
        let (exit, output) = run(&session, VersionSelection::Prompt, &["9", "", "4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(output.contains("Action: unknown action: '9'\n"));
        assert_eq!(output.matches("Action: ").count(), 3);
    }

    #[test]
    fn order_is_sent_without_confirmation() {
        let session = Arc::new(RecordingSession::default());
        let (exit, output) = run(
            &session,
            VersionSelection::Prompt,
            // FIX.4.2 from the menu; market order; configured header.
            &["1", "3", "ORD1", "AAPL", "1", "1", "100", "1", "4"],
        );

        assert_eq!(exit, ExitReason::Quit);
        assert!(output.contains("6) FIXT.1.1 (FIX.5.0)\nBeginString: "));
        assert!(!output.contains("?: "));
        let sent = session.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].begin_string(), Ok("FIX.4.2"));
        assert_eq!(sent[0].body.get_string(Tag::PRICE), Ok("0.00"));
    }

    #[test]
    fn cancel_requires_confirmation() {
        let session = Arc::new(RecordingSession::default());
        let cancel = ["2", "ORD1", "CXL1", "AAPL", "2", "100", "TW", "ISLD", "n"];

        let mut lines = cancel.to_vec();
        lines.push("n");
        lines.extend(cancel);
        lines.push("y");
        lines.push("4");
        let (exit, output) = run(&session, fixed("FIX.4.4"), &lines);

        assert_eq!(exit, ExitReason::Quit);
        assert_eq!(output.matches("\nSend Cancel?: ").count(), 2);
        let sent = session.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].msg_type(), Ok("F"));
    }

    #[test]
    fn market_data_requires_confirmation() {
        let session = Arc::new(RecordingSession::default());
        let (_, output) = run(&session, fixed("FIX.4.2"), &["3", "Y", "4"]);

        assert!(output.contains("\nSend MarketDataRequest?: "));
        assert_eq!(session.sent.lock()[0].msg_type(), Ok("V"));
    }

    #[test]
    fn market_data_without_test_is_reported() {
        let session = Arc::new(RecordingSession::default());
        let (exit, output) = run(&session, fixed("FIX.4.0"), &["3", "4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(output.contains("No test for version FIX.4.0\n"));
        assert!(session.sent.lock().is_empty());
    }

    #[test]
    fn unknown_version_builds_nothing_for_orders() {
        let session = Arc::new(RecordingSession::default());
        let (exit, output) = run(&session, fixed("FIX.9.9"), &["1", "2", "4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(!output.contains("ClOrdID"));
        assert_eq!(output.matches("Action: ").count(), 3);
        assert!(session.sent.lock().is_empty());
    }

    #[test]
    fn transmit_error_is_recoverable() {
        let session = Arc::new(RecordingSession {
            reject: true,
            ..RecordingSession::default()
        });
        let (exit, output) = run(&session, fixed("FIX.4.2"), &["3", "y", "4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(output.contains("Session not logged on\n"));
    }

    #[test]
    fn invalid_choice_returns_to_menu() {
        let session = Arc::new(RecordingSession::default());
        let (exit, output) = run(&session, VersionSelection::Prompt, &["1", "7", "4"]);

        assert_eq!(exit, ExitReason::Quit);
        assert!(output.contains("Invalid BeginString: 7\n"));
    }

    #[test]
    fn fatal_errors() {
        assert!(ActionError::Prompt(PromptError::InputExhausted).is_fatal());
        assert!(!ActionError::UnknownAction("x".to_string()).is_fatal());
        assert!(!ActionError::Build(BuildError::UnsupportedVersion("FIX.4.0".to_string())).is_fatal());
        assert!(ActionError::Build(BuildError::Prompt(PromptError::InputExhausted)).is_fatal());
    }
}

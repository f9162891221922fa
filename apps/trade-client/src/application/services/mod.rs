//! Application Services
//!
//! Prompting, message construction and inbound rendering shared by the
//! operator loop and the session callbacks.

mod console;
mod dispatcher;
mod dumper;
mod header;
mod message_builder;
mod prompter;
mod trade_client_app;

pub use console::Console;
pub use dispatcher::{ActionKind, VersionDispatcher};
pub use dumper::{MessageDumper, render as render_dump};
pub use header::{HeaderPopulator, SENDER_COMP_ID_KEY, TARGET_COMP_ID_KEY};
pub use message_builder::{BuildError, MessageBuilder};
pub use prompter::{ACTION_MENU, FieldPrompter, PromptError};
pub use trade_client_app::TradeClientApplication;

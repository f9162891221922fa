//! Message Dumper
//!
//! Renders inbound application messages on the console.

use std::io::{self, Write};

use super::console::Console;
use crate::domain::fix::{Message, Tag};

/// Prints decoded inbound messages.
#[derive(Debug, Clone)]
pub struct MessageDumper {
    console: Console,
}

impl MessageDumper {
    /// Dumper writing to the shared console.
    #[must_use]
    pub const fn new(console: Console) -> Self {
        Self { console }
    }

    /// Write the dump as one console block.
    ///
    /// # Errors
    ///
    /// Returns the console write error.
    pub fn dump(&self, message: &Message) -> io::Result<()> {
        let lines = render(message);
        self.console.write_block(|w| {
            for line in &lines {
                writeln!(w, "{line}")?;
            }
            Ok(())
        })
    }
}

/// Dump lines for a message, body tags in ascending order.
///
/// Each tag is decoded as text, then integer, then timestamp; a tag that
/// decodes as none of them is left out.
#[must_use]
pub fn render(message: &Message) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("FromApp: {message}"),
        "as".to_string(),
        format!("  MsgType: {}", message.msg_type().unwrap_or_default()),
    ];

    let mut tags: Vec<Tag> = message.body.tags().collect();
    tags.sort_unstable();

    lines.extend(tags.into_iter().filter_map(|tag| {
        decode(message, tag).map(|value| format!("  {:>3}: {value}", tag.number()))
    }));
    lines
}

fn decode(message: &Message, tag: Tag) -> Option<String> {
    let body = &message.body;
    body.get_string(tag)
        .map(str::to_string)
        .or_else(|_| body.get_int(tag).map(|value| value.to_string()))
        .or_else(|_| body.get_time(tag).map(|value| value.to_string()))
        .ok()
}

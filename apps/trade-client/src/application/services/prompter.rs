//! Field Prompter
//!
//! Blocking, line-oriented reads of operator input. Prompts go to the
//! shared console; answers come from an explicit reader so the loop can be
//! driven by scripted input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use super::console::Console;
use crate::domain::order_entry::EnumeratedField;

/// Menu lines shown before every action prompt.
pub const ACTION_MENU: [&str; 4] = [
    "1) Enter Order",
    "2) Cancel Order",
    "3) Request Market Test",
    "4) Quit",
];

/// Errors reading a value from the operator.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading input or writing the prompt failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input reached end of stream.
    #[error("Input closed")]
    InputExhausted,

    /// Text did not parse as a decimal.
    #[error("can't convert {0} to decimal")]
    InvalidNumber(String),

    /// Menu selection was not an integer in range.
    #[error("Invalid {label}: {input}")]
    InvalidChoice {
        /// Field label.
        label: String,
        /// What the operator typed.
        input: String,
    },
}

impl PromptError {
    /// True when input can no longer be read; the operator loop must end.
    #[must_use]
    pub const fn is_input_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::InputExhausted)
    }
}

/// Reads typed values from the operator.
pub struct FieldPrompter<R> {
    input: R,
    console: Console,
}

impl<R: BufRead> FieldPrompter<R> {
    /// Create a prompter over an input reader and the shared console.
    pub const fn new(input: R, console: Console) -> Self {
        Self { input, console }
    }

    /// The console prompts are written to.
    #[must_use]
    pub const fn console(&self) -> &Console {
        &self.console
    }

    /// Prompt `<label>: ` and read one line without its terminator.
    ///
    /// # Errors
    ///
    /// [`PromptError::InputExhausted`] at end of input, [`PromptError::Io`]
    /// on read or write failure.
    pub fn query_text(&mut self, label: &str) -> Result<String, PromptError> {
        self.console.prompt(&format!("{label}: "))?;
        self.read_line()
    }

    /// Prompt for and parse a decimal.
    ///
    /// # Errors
    ///
    /// [`PromptError::InvalidNumber`] when the text is not a base-10 decimal.
    /// Digit separators (`1_000`) are rejected.
    pub fn query_decimal(&mut self, label: &str) -> Result<Decimal, PromptError> {
        let text = self.query_text(label)?;
        let trimmed = text.trim();
        let invalid = || PromptError::InvalidNumber(trimmed.to_string());
        if trimmed.contains('_') {
            return Err(invalid());
        }
        Decimal::from_str(trimmed).map_err(|_| invalid())
    }

    /// Show a numbered menu and read a 1-based selection.
    ///
    /// Returns the mapped value when `values` is given, otherwise the
    /// selection text as typed.
    ///
    /// # Errors
    ///
    /// [`PromptError::InvalidChoice`] when the selection is not an integer
    /// in `[1, choices.len()]`.
    pub fn query_choice(
        &mut self,
        label: &str,
        choices: &[&str],
        values: Option<&[&str]>,
    ) -> Result<String, PromptError> {
        self.console.write_block(|w| {
            for (n, choice) in choices.iter().enumerate() {
                writeln!(w, "{}) {choice}", n + 1)?;
            }
            Ok(())
        })?;

        let selection = self.query_text(label)?;
        let index = selection
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=choices.len()).contains(n))
            .ok_or_else(|| PromptError::InvalidChoice {
                label: label.to_string(),
                input: selection.clone(),
            })?;

        Ok(match values.and_then(|values| values.get(index - 1)) {
            Some(value) => (*value).to_string(),
            None => selection,
        })
    }

    /// Choose a value of an enumerated field from its menu.
    ///
    /// # Errors
    ///
    /// As [`Self::query_choice`].
    pub fn query_field<T: EnumeratedField>(&mut self) -> Result<T, PromptError> {
        let labels = T::labels();
        let codes = T::codes();
        let code = self.query_choice(T::FIELD_NAME, &labels, Some(codes.as_slice()))?;
        T::from_code(&code).ok_or_else(|| PromptError::InvalidChoice {
            label: T::FIELD_NAME.to_string(),
            input: code,
        })
    }

    /// Ask a yes/no question; only `Y` (any case) is yes.
    ///
    /// # Errors
    ///
    /// Input failures only.
    pub fn query_confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.console.write_block(|w| {
            writeln!(w)?;
            write!(w, "{prompt}?: ")
        })?;
        let answer = self.read_line()?;
        Ok(answer.trim().eq_ignore_ascii_case("Y"))
    }

    /// Show the action menu and read the operator's choice.
    ///
    /// # Errors
    ///
    /// Input failures only.
    pub fn query_action(&mut self) -> Result<String, PromptError> {
        self.console.write_block(|w| {
            writeln!(w)?;
            for entry in ACTION_MENU {
                writeln!(w, "{entry}")?;
            }
            write!(w, "Action: ")
        })?;
        Ok(self.read_line()?.trim().to_string())
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputExhausted);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

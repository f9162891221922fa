//! Application Use Cases
//!
//! Use cases orchestrate prompting, building and sending.

mod action_controller;

pub use action_controller::{
    ActionController, ActionError, ActionOutcome, ExitReason, VersionSelection,
};

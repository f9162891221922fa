//! Session Adapters
//!
//! Implementations of the session ports.

mod counterparty;
mod loopback;

pub use counterparty::{admin_message, reply};
pub use loopback::LoopbackInitiator;

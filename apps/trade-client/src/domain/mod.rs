//! Domain Layer - FIX vocabulary and order entry rules.
//!
//! Pure types with no I/O: tags, fields and messages, the operator's
//! intents, and the per-version contracts that turn intents into messages.

/// Errors raised by domain encoding.
pub mod errors;

/// FIX tags, versions, field maps and messages.
pub mod fix;

/// Order entry intents, version contracts and encoders.
pub mod order_entry;

pub use errors::DomainError;

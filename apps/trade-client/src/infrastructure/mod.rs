//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port interfaces
//! defined in the application layer.

/// Settings file loading and validation.
pub mod config;

/// Loopback session adapter.
pub mod session;

/// Tracing subscriber setup.
pub mod telemetry;

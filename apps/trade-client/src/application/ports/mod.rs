//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with the session collaborator.
//! - **Driver Ports** (Primary/Inbound): callbacks the session invokes on us
//! - **Driven Ports** (Secondary/Outbound): sending, lifecycle and settings

mod application_port;
mod session_port;
mod settings_port;

pub use application_port::SessionApplication;
pub use session_port::{InitiatorPort, SessionError, SessionPort, TransmitError};
pub use settings_port::SettingsLookup;

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Trade Client - Interactive FIX Session Exerciser
//!
//! Prompts an operator for orders, cancels and a market data test, builds
//! the message for the chosen FIX version and hands it to the session.
//! Inbound application messages are dumped to the same console.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: FIX vocabulary and order entry rules
//!   - `fix`: Tags, versions, field maps, messages, session identity
//!   - `order_entry`: Side/OrdType/TimeInForce, intents, version contracts
//!
//! - **Application**: Ports, services and the operator loop
//!   - `ports`: Session, initiator, settings and callback interfaces
//!   - `services`: Console, prompter, header populator, builder, dispatcher, dumper
//!   - `use_cases`: Action controller
//!
//! - **Infrastructure**: Adapters
//!   - `config`: YAML settings with environment interpolation
//!   - `telemetry`: Tracing subscriber setup
//!   - `session`: Loopback session adapter
//!
//! # Data Flow
//!
//! ```text
//! operator ──► ActionController ──► VersionDispatcher ──► MessageBuilder ──► SessionPort::send
//!                                                              │
//!                                            FieldPrompter ◄───┴───► HeaderPopulator
//!
//! session ──► SessionApplication::from_app ──► MessageDumper ──► Console
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - FIX types and order entry rules with no I/O.
pub mod domain;

/// Application layer - Ports, services and use cases.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::fix::{FieldMap, Message, ProtocolVersion, SessionId, Tag};
pub use domain::order_entry::{OrdType, Side, TimeInForce, VersionContract};

// Application
pub use application::ports::{
    InitiatorPort, SessionApplication, SessionPort, SettingsLookup, TransmitError,
};
pub use application::services::{Console, FieldPrompter, TradeClientApplication};
pub use application::use_cases::{ActionController, ExitReason, VersionSelection};

// Infrastructure
pub use infrastructure::config::{ConfigError, TradeClientConfig, load_config};
pub use infrastructure::session::LoopbackInitiator;

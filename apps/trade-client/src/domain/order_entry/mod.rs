//! Order Entry Bounded Context
//!
//! What the operator asks for, the per-version rules for turning it into a
//! message, and the encoders that apply those rules.

pub mod contracts;
pub mod encode;
pub mod intents;
pub mod value_objects;

pub use contracts::{
    CONTRACTS, DECIMAL_SCALE, HeaderStrategy, QtyPosition, TifPosition, VersionContract,
};
pub use encode::{encode_cancel, encode_market_data, encode_order};
pub use intents::{CancelIntent, HeaderIdentity, MarketDataIntent, OrderIntent};
pub use value_objects::{EnumeratedField, OrdType, Side, TimeInForce};

//! Order Entry Value Objects
//!
//! Enumerated fields the operator chooses from.

mod enumerated;
mod ord_type;
mod side;
mod time_in_force;

pub use enumerated::EnumeratedField;
pub use ord_type::OrdType;
pub use side::Side;
pub use time_in_force::TimeInForce;

//! Application Layer
//!
//! The application layer drives message construction from operator input.
//! It defines:
//!
//! - **Ports**: Interfaces to the FIX session collaborator
//! - **Services**: Prompting, header population, building, dispatch, dumping
//! - **Use Cases**: The operator action loop

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;

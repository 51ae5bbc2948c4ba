//! Application layer - Use cases and orchestration
//!
//! Defines the ports the integrations implement and the single
//! use-case of this tool: fetch conditions, format the announcement,
//! hand it to the radio link.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

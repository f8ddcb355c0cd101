//! Application layer
//!
//! Use cases for the player client. Services depend on port traits, never on
//! concrete infrastructure.

pub mod error;
pub mod services;

pub use error::ServiceError;

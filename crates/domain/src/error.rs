//! Unified error types for the domain layer
//!
//! Provides a common error type for constructing domain values, so adapters
//! don't have to pass around String or anyhow errors.

use thiserror::Error;

use crate::value_objects::{BirthDateParseError, EmailParseError, PhoneParseError};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if username.trim().is_empty() {
    ///     return Err(DomainError::validation("Username cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<EmailParseError> for DomainError {
    fn from(err: EmailParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<PhoneParseError> for DomainError {
    fn from(err: PhoneParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<BirthDateParseError> for DomainError {
    fn from(err: BirthDateParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

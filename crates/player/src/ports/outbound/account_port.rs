//! Account Port - Boundary to the account backend
//!
//! Registration, login and password reset all go through this trait. The
//! shipped adapter simulates the backend with a fixed delay; tests use the
//! generated `MockAccountPort`.
//!
//! Note: uses `async_trait` instead of returning `Pin<Box<dyn Future>>` for
//! better mockall compatibility.

use async_trait::async_trait;
use thiserror::Error;

use reelhouse_domain::{AccountSummary, SignupSubmission};

/// Failure reported by the account backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The backend understood the request and refused it
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or failed internally
    #[error("Account service unavailable: {0}")]
    Unavailable(String),
}

impl AccountError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Create an account from validated sign-up data
    async fn register(&self, submission: SignupSubmission)
        -> Result<AccountSummary, AccountError>;

    /// Authenticate with email and password
    async fn login(&self, email: String, password: String) -> Result<AccountSummary, AccountError>;

    /// Ask for a password reset link to be sent to `email`
    async fn request_password_reset(&self, email: String) -> Result<(), AccountError>;
}

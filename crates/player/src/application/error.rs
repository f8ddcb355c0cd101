//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::AccountError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The account backend refused or failed the request
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl ServiceError {
    /// Check if the backend understood the request and refused it
    pub fn is_rejected(&self) -> bool {
        matches!(self, ServiceError::Account(AccountError::Rejected(_)))
    }

    /// Text suitable for an error banner
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Account(AccountError::Rejected(msg)) => msg.clone(),
            ServiceError::Account(AccountError::Unavailable(_)) => {
                "We couldn't reach the casino right now. Please try again.".to_string()
            }
        }
    }
}

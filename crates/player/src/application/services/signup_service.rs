//! Signup Service - submits the sign-up form
//!
//! Validation runs first; the account backend is only contacted when the
//! form is clean. Every outcome is reported back as a [`SignupOutcome`] so the
//! screen can show inline errors, navigate on success, or show a banner.

use std::sync::Arc;

use chrono::NaiveDate;
use reelhouse_domain::{validate, AccountSummary, ErrorMap, SignupField, SignupForm};

use crate::application::ServiceError;
use crate::ports::outbound::AccountPort;

/// Result of a sign-up attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The form has validation errors; nothing was sent
    Invalid(ErrorMap<SignupField>),
    /// The account was created
    Registered(AccountSummary),
    /// The backend refused or failed; the message is meant for the player
    Failed(String),
}

#[derive(Clone)]
pub struct SignupService {
    accounts: Arc<dyn AccountPort>,
}

impl SignupService {
    pub fn new(accounts: Arc<dyn AccountPort>) -> Self {
        Self { accounts }
    }

    /// Validate and, if clean, register the account.
    pub async fn submit(
        &self,
        form: &SignupForm,
        terms_accepted: bool,
        today: NaiveDate,
    ) -> SignupOutcome {
        let errors = validate(form, terms_accepted, today);
        if !errors.is_empty() {
            tracing::debug!(
                fields = ?errors.fields(),
                "Sign-up blocked by validation"
            );
            return SignupOutcome::Invalid(errors);
        }

        match self
            .accounts
            .register(form.to_submission())
            .await
            .map_err(ServiceError::from)
        {
            Ok(summary) => {
                tracing::info!(account_id = %summary.id, "Sign-up completed");
                SignupOutcome::Registered(summary)
            }
            Err(e) => {
                tracing::error!("Sign-up failed: {}", e);
                SignupOutcome::Failed(e.user_message())
            }
        }
    }
}

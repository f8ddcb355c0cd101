//! Auth Service - login and password reset use cases

use std::sync::Arc;

use reelhouse_domain::{
    AccountSummary, ErrorMap, LoginField, LoginForm, PasswordResetForm, ResetField,
};

use crate::application::ServiceError;
use crate::ports::outbound::AccountPort;

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Invalid(ErrorMap<LoginField>),
    SignedIn(AccountSummary),
    Failed(String),
}

/// Result of a password reset request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Invalid(ErrorMap<ResetField>),
    /// The request was accepted. The confirmation never says whether the
    /// address belongs to an account.
    Sent,
    Failed(String),
}

#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountPort>,
}

impl AuthService {
    pub fn new(accounts: Arc<dyn AccountPort>) -> Self {
        Self { accounts }
    }

    pub async fn login(&self, form: &LoginForm) -> LoginOutcome {
        let errors = form.validate();
        if !errors.is_empty() {
            return LoginOutcome::Invalid(errors);
        }

        match self
            .accounts
            .login(form.email.trim().to_string(), form.password.clone())
            .await
            .map_err(ServiceError::from)
        {
            Ok(summary) => {
                tracing::info!(account_id = %summary.id, remember_me = form.remember_me, "Signed in");
                LoginOutcome::SignedIn(summary)
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                LoginOutcome::Failed(e.user_message())
            }
        }
    }

    pub async fn request_password_reset(&self, form: &PasswordResetForm) -> ResetOutcome {
        let errors = form.validate();
        if !errors.is_empty() {
            return ResetOutcome::Invalid(errors);
        }

        match self
            .accounts
            .request_password_reset(form.email.trim().to_string())
            .await
            .map_err(ServiceError::from)
        {
            Ok(()) => ResetOutcome::Sent,
            Err(e) => {
                tracing::error!("Password reset request failed: {}", e);
                ResetOutcome::Failed(e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{AccountError, MockAccountPort};
    use mockall::predicate::eq;
    use reelhouse_domain::{AccountId, ValidationIssue};

    #[tokio::test]
    async fn login_passes_trimmed_email_to_backend() {
        let mut accounts = MockAccountPort::new();
        accounts
            .expect_login()
            .with(eq("spin@example.com".to_string()), eq("hunter22".to_string()))
            .times(1)
            .returning(|email, _| {
                Ok(AccountSummary {
                    id: AccountId::new(),
                    username: "spin".to_string(),
                    email,
                })
            });

        let service = AuthService::new(Arc::new(accounts));
        let form = LoginForm {
            email: "  spin@example.com ".to_string(),
            password: "hunter22".to_string(),
            remember_me: true,
        };

        assert!(matches!(
            service.login(&form).await,
            LoginOutcome::SignedIn(summary) if summary.username == "spin"
        ));
    }

    #[tokio::test]
    async fn login_with_blank_password_is_not_sent() {
        let mut accounts = MockAccountPort::new();
        accounts.expect_login().times(0);

        let service = AuthService::new(Arc::new(accounts));
        let form = LoginForm {
            email: "spin@example.com".to_string(),
            ..LoginForm::default()
        };

        match service.login(&form).await {
            LoginOutcome::Invalid(errors) => {
                assert_eq!(errors.get(LoginField::Password), Some(ValidationIssue::Required));
                assert!(!errors.contains(LoginField::Email));
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_failure_becomes_banner_message() {
        let mut accounts = MockAccountPort::new();
        accounts
            .expect_login()
            .returning(|_, _| Err(AccountError::rejected("Wrong email or password")));

        let service = AuthService::new(Arc::new(accounts));
        let form = LoginForm {
            email: "spin@example.com".to_string(),
            password: "nope".to_string(),
            remember_me: false,
        };

        assert_eq!(
            service.login(&form).await,
            LoginOutcome::Failed("Wrong email or password".to_string())
        );
    }

    #[tokio::test]
    async fn reset_request_is_sent_for_valid_email() {
        let mut accounts = MockAccountPort::new();
        accounts
            .expect_request_password_reset()
            .with(eq("spin@example.com".to_string()))
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(accounts));
        let form = PasswordResetForm {
            email: "spin@example.com".to_string(),
        };

        assert_eq!(service.request_password_reset(&form).await, ResetOutcome::Sent);
    }

    #[tokio::test]
    async fn reset_request_rejects_malformed_email() {
        let mut accounts = MockAccountPort::new();
        accounts.expect_request_password_reset().times(0);

        let service = AuthService::new(Arc::new(accounts));
        let form = PasswordResetForm {
            email: "not-an-email".to_string(),
        };

        assert!(matches!(
            service.request_password_reset(&form).await,
            ResetOutcome::Invalid(errors) if errors.contains(ResetField::Email)
        ));
    }
}

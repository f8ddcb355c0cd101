//! Simulated account backend
//!
//! There is no real account server yet. Every call resolves after a fixed
//! delay so the UI exercises its busy states. Usernames registered during
//! the session are remembered so a duplicate registration is refused.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reelhouse_domain::{AccountId, AccountSummary, EmailAddress, SignupSubmission};

use crate::ports::outbound::{AccountError, AccountPort};

/// Account backend that answers locally after `latency`
pub struct SimulatedAccountService {
    latency: Duration,
    registered_usernames: Mutex<HashSet<String>>,
}

impl SimulatedAccountService {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            registered_usernames: Mutex::new(HashSet::new()),
        }
    }

    async fn wait(&self) {
        simulate_latency(self.latency).await;
    }
}

#[async_trait]
impl AccountPort for SimulatedAccountService {
    async fn register(
        &self,
        submission: SignupSubmission,
    ) -> Result<AccountSummary, AccountError> {
        self.wait().await;

        let key = submission.username.trim().to_lowercase();
        {
            let mut registered = self.registered_usernames.lock().map_err(|e| {
                tracing::error!("Account registry lock poisoned: {}", e);
                AccountError::unavailable("registry lock poisoned")
            })?;
            if !registered.insert(key) {
                tracing::info!(username = %submission.username, "Registration refused: username taken");
                return Err(AccountError::rejected(format!(
                    "The username '{}' is already taken",
                    submission.username.trim()
                )));
            }
        }

        let summary = AccountSummary {
            id: AccountId::new(),
            username: submission.username.trim().to_string(),
            email: submission.email,
        };
        tracing::info!(account_id = %summary.id, "Registered simulated account");
        Ok(summary)
    }

    async fn login(&self, email: String, _password: String) -> Result<AccountSummary, AccountError> {
        self.wait().await;

        let address = EmailAddress::parse(&email)
            .map_err(|e| AccountError::rejected(format!("Cannot sign in: {}", e)))?;
        let summary = AccountSummary {
            id: AccountId::new(),
            username: address.local_part().to_string(),
            email: address.to_string(),
        };
        tracing::info!(account_id = %summary.id, "Signed in to simulated account");
        Ok(summary)
    }

    async fn request_password_reset(&self, email: String) -> Result<(), AccountError> {
        self.wait().await;
        tracing::info!(email = %email, "Simulated password reset requested");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn simulate_latency(latency: Duration) {
    tokio::time::sleep(latency).await;
}

// gloo timers are !Send; the wrapper is sound because wasm is single-threaded
#[cfg(target_arch = "wasm32")]
async fn simulate_latency(latency: Duration) {
    let ms = u32::try_from(latency.as_millis()).unwrap_or(u32::MAX);
    send_wrapper::SendWrapper::new(gloo_timers::future::TimeoutFuture::new(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(username: &str) -> SignupSubmission {
        SignupSubmission {
            username: username.to_string(),
            first_name: "Ada".to_string(),
            last_name: "King".to_string(),
            email: "ada@reelhouse.io".to_string(),
            password: "correct-horse".to_string(),
            date_of_birth: "1990-04-12".to_string(),
            phone: "+447911123456".to_string(),
            address: "1 Spin Street".to_string(),
            referral_email: String::new(),
            games: vec!["Slots".to_string()],
        }
    }

    #[tokio::test]
    async fn register_returns_account_summary() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        let summary = service
            .register(submission(" reel_queen "))
            .await
            .expect("registered");

        assert_eq!(summary.username, "reel_queen");
        assert_eq!(summary.email, "ada@reelhouse.io");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_case_insensitively() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        service
            .register(submission("reel_queen"))
            .await
            .expect("first registration");

        let err = service
            .register(submission("Reel_Queen"))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, AccountError::Rejected(_)));
        assert!(err.to_string().contains("already taken"));
    }

    #[tokio::test]
    async fn login_derives_username_from_email() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        let summary = service
            .login("spinner@example.com".to_string(), "pw".to_string())
            .await
            .expect("signed in");
        assert_eq!(summary.username, "spinner");
    }

    #[tokio::test]
    async fn login_rejects_malformed_email() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        let result = service
            .login("spinner".to_string(), "pw".to_string())
            .await;
        assert!(matches!(result, Err(AccountError::Rejected(_))));
    }

    #[tokio::test]
    async fn password_reset_always_succeeds() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        assert!(service
            .request_password_reset("nobody@example.com".to_string())
            .await
            .is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn calls_wait_for_configured_latency() {
        let service = SimulatedAccountService::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        service
            .request_password_reset("a@b.co".to_string())
            .await
            .expect("reset");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}

//! Signed-in player state

use dioxus::prelude::*;

use reelhouse_domain::AccountSummary;

/// The signed-in account, if any
#[derive(Clone, Copy)]
pub struct SessionState {
    account: Signal<Option<AccountSummary>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            account: Signal::new(None),
        }
    }

    pub fn account(&self) -> Option<AccountSummary> {
        self.account.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.account.read().is_some()
    }

    pub fn sign_in(&mut self, account: AccountSummary) {
        tracing::info!(account_id = %account.id, "Session started");
        self.account.set(Some(account));
    }

    pub fn sign_out(&mut self) {
        let previous = self.account.write().take();
        if let Some(account) = previous {
            tracing::info!(account_id = %account.id, "Session ended");
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

//! Service providers for the presentation layer
//!
//! The composition root puts a [`Services`] bundle into Dioxus context.
//! Components reach application services through the `use_*_service`
//! hooks and never touch infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{AuthService, LobbyService, PreferenceService, SignupService};
use crate::ports::outbound::{AccountPort, PlatformPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub signup: Arc<SignupService>,
    pub auth: Arc<AuthService>,
    pub lobby: Arc<LobbyService>,
    pub preferences: Arc<PreferenceService>,
}

impl Services {
    /// Create all services
    ///
    /// # Arguments
    /// * `accounts` - Account backend shared by sign-up and auth
    /// * `platform` - Platform port backing the stored preferences
    /// * `lobby` - Lobby content for the landing page and dashboard
    pub fn new(
        accounts: Arc<dyn AccountPort>,
        platform: Arc<dyn PlatformPort>,
        lobby: LobbyService,
    ) -> Self {
        Self {
            signup: Arc::new(SignupService::new(accounts.clone())),
            auth: Arc::new(AuthService::new(accounts)),
            lobby: Arc::new(lobby),
            preferences: Arc::new(PreferenceService::new(platform)),
        }
    }
}

/// Hook to access the SignupService from context
pub fn use_signup_service() -> Arc<SignupService> {
    let services = use_context::<Services>();
    services.signup.clone()
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService> {
    let services = use_context::<Services>();
    services.auth.clone()
}

/// Hook to access the LobbyService from context
pub fn use_lobby_service() -> Arc<LobbyService> {
    let services = use_context::<Services>();
    services.lobby.clone()
}

/// Hook to access the PreferenceService from context
pub fn use_preference_service() -> Arc<PreferenceService> {
    let services = use_context::<Services>();
    services.preferences.clone()
}

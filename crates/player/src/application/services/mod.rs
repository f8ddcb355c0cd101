//! Application services
//!
//! This module contains application services that implement use cases
//! for the Reelhouse player client. Services depend on port traits, not
//! concrete infrastructure implementations.

pub mod auth_service;
pub mod lobby_service;
pub mod preference_service;
pub mod signup_service;

pub use auth_service::{AuthService, LoginOutcome, ResetOutcome};
pub use lobby_service::LobbyService;
pub use preference_service::{PreferenceService, Theme};
pub use signup_service::{SignupOutcome, SignupService};

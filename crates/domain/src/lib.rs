//! Reelhouse domain: sign-up form model and rules, login and reset forms,
//! and lobby catalog types. No UI or I/O lives here.

pub mod auth;
pub mod error;
pub mod ids;
pub mod lobby;
pub mod signup;
pub mod validation;
pub mod value_objects;

pub use auth::{AccountSummary, LoginField, LoginForm, PasswordResetForm, ResetField};
pub use error::DomainError;
pub use ids::{AccountId, GameId};
pub use lobby::{
    featured_games, filter_games, format_credits, mask_player_name, GameCategory, GameListing,
    PlayerStats, RecentWin,
};
pub use signup::{
    compute_progress, first_invalid_section, validate, ProgressSnapshot, SectionDescriptor,
    SectionId, SectionNavigator, SignupField, SignupForm, SignupSubmission, GAME_PREFERENCES,
    SECTIONS,
};
pub use validation::{ErrorMap, ValidationIssue};
pub use value_objects::{BirthDate, EmailAddress, PhoneNumber, MINIMUM_PLAYER_AGE};

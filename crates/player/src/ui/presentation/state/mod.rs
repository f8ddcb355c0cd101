//! Dioxus signal-backed state shared between components

pub mod session_state;
pub mod signup_state;
pub mod theme_state;
pub mod timed_notice;

pub use session_state::SessionState;
pub use signup_state::SignupState;
pub use theme_state::ThemeState;
pub use timed_notice::TimedNotice;

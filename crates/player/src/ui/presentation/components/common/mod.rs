//! Common reusable UI components.
//!
//! Shared form controls, banners and layout primitives used across views.

mod banner;
pub use banner::{Banner, BannerKind};

mod form_field;
pub use form_field::{CheckboxField, FormField};

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

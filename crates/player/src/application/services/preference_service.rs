//! Preference Service - small settings kept in platform storage
//!
//! The colour theme and the "remember me" email survive restarts. Unknown or
//! missing stored values fall back to defaults.

use std::str::FromStr;
use std::sync::Arc;

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Colour scheme of the whole client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Clone)]
pub struct PreferenceService {
    platform: Arc<dyn PlatformPort>,
}

impl PreferenceService {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }

    pub fn theme(&self) -> Theme {
        match self.platform.load_preference(storage_keys::THEME) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        self.platform.save_preference(storage_keys::THEME, theme.as_str());
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.platform
            .load_preference(storage_keys::REMEMBERED_EMAIL)
            .filter(|email| !email.trim().is_empty())
    }

    /// Store `email` when `remember` is set, forget any stored one otherwise
    pub fn remember_email(&self, email: &str, remember: bool) {
        if remember {
            self.platform
                .save_preference(storage_keys::REMEMBERED_EMAIL, email.trim());
        } else {
            self.platform.forget_preference(storage_keys::REMEMBERED_EMAIL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use chrono::NaiveDateTime;

    fn service() -> PreferenceService {
        PreferenceService::new(Arc::new(create_mock_platform(NaiveDateTime::default())))
    }

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(service().theme(), Theme::Dark);
    }

    #[test]
    fn saved_theme_is_read_back() {
        let prefs = service();
        prefs.save_theme(Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn garbage_theme_falls_back_to_default() {
        let platform = Arc::new(create_mock_platform(NaiveDateTime::default()));
        platform.save_preference(storage_keys::THEME, "neon");
        let prefs = PreferenceService::new(platform);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn remember_me_stores_and_forgets_email() {
        let prefs = service();
        prefs.remember_email(" spin@example.com ", true);
        assert_eq!(prefs.remembered_email().as_deref(), Some("spin@example.com"));

        prefs.remember_email("spin@example.com", false);
        assert_eq!(prefs.remembered_email(), None);
    }

    #[test]
    fn toggling_theme_twice_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}

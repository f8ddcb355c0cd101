//! Colour theme shared through context

use dioxus::prelude::*;

use crate::application::services::{PreferenceService, Theme};

/// Current theme, provided at the app root and read by leaf components
#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: Signal<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Signal::new(initial),
        }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Class applied to the app root, e.g. `theme-dark`
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.theme().as_str())
    }

    /// Flip between dark and light and persist the choice
    pub fn toggle(&mut self, preferences: &PreferenceService) {
        let next = self.theme().toggled();
        self.theme.set(next);
        preferences.save_theme(next);
        tracing::debug!(theme = next.as_str(), "Theme changed");
    }
}

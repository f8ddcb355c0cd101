use dioxus::prelude::*;

use super::super::icon::{Icon, IconKind};
use crate::application::services::Theme;
use crate::ui::presentation::services::use_preference_service;
use crate::ui::presentation::state::ThemeState;

/// Header button switching between dark and light
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme_state = use_context::<ThemeState>();
    let preferences = use_preference_service();

    let (icon, label) = match theme_state.theme() {
        Theme::Dark => (IconKind::Sun, "Switch to light theme"),
        Theme::Light => (IconKind::Moon, "Switch to dark theme"),
    };

    rsx! {
        button {
            class: "icon-button",
            r#type: "button",
            title: label,
            aria_label: label,
            onclick: move |_| theme_state.toggle(&preferences),
            Icon { kind: icon }
        }
    }
}

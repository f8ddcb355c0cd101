use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::services::use_preference_service;
use presentation::state::{SessionState, ThemeState};

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();
    let preferences = use_preference_service();

    // These must be created inside an active Dioxus runtime.
    let theme = use_context_provider(|| ThemeState::new(preferences.theme()));
    use_context_provider(SessionState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/css/main.css"),
        }

        div { class: "app {theme.css_class()}",
            {
                match shell {
                    ShellKind::Desktop => rsx! {
                        DesktopShell {
                            Router::<routes::Route> {}
                        }
                    },
                    ShellKind::Mobile => rsx! {
                        MobileShell {
                            Router::<routes::Route> {}
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div { class: "shell shell-desktop", {children} }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div { class: "shell shell-mobile", {children} }
    }
}

use dioxus::prelude::*;

use super::Route;
use crate::ui::presentation::components::common::ThemeToggle;
use crate::ui::presentation::components::icon::{Icon, IconKind};
use crate::ui::presentation::state::SessionState;

/// Header, routed page and footer shared by every route
#[component]
pub fn SiteLayout() -> Element {
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    rsx! {
        div { class: "site",
            header { class: "site-header",
                Link { to: Route::HomeRoute {}, class: "brand",
                    Icon { kind: IconKind::Logo, size: 24 }
                    span { "Reelhouse" }
                }
                nav { class: "site-nav",
                    if session.is_signed_in() {
                        Link { to: Route::DashboardRoute {}, class: "nav-link", "Lobby" }
                        button {
                            class: "btn btn-ghost btn-small",
                            r#type: "button",
                            onclick: move |_| {
                                session.sign_out();
                                navigator.push(Route::HomeRoute {});
                            },
                            "Log out"
                        }
                    } else {
                        Link { to: Route::LoginRoute {}, class: "nav-link", "Log in" }
                        Link { to: Route::SignupRoute {}, class: "btn btn-primary btn-small", "Sign up" }
                    }
                    ThemeToggle {}
                }
            }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                p { "Play responsibly. 18+ only." }
            }
        }
    }
}

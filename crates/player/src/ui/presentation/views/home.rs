//! Landing page

use dioxus::prelude::*;

use crate::ui::presentation::components::lobby::GameCard;
use crate::ui::presentation::services::use_lobby_service;
use crate::ui::presentation::state::SessionState;
use crate::ui::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let lobby = use_lobby_service();
    let session = use_context::<SessionState>();
    let featured = lobby.featured();

    rsx! {
        div { class: "home",
            section { class: "hero",
                h1 { class: "hero-title", "Spin, deal and win at " span { class: "accent", "Reelhouse" } }
                p { class: "hero-subtitle",
                    "Hundreds of slots, table classics and live dealers. Sign up in under two minutes."
                }
                div { class: "hero-actions",
                    if session.is_signed_in() {
                        Link { to: Route::DashboardRoute {}, class: "btn btn-primary", "Go to lobby" }
                    } else {
                        Link { to: Route::SignupRoute {}, class: "btn btn-primary", "Join now" }
                        Link { to: Route::LoginRoute {}, class: "btn btn-ghost", "Log in" }
                    }
                }
            }

            section { class: "featured",
                h2 { "Featured games" }
                div { class: "game-grid",
                    for game in featured {
                        GameCard { key: "{game.id}", game: game.clone() }
                    }
                }
            }
        }
    }
}

//! Player dashboard
//!
//! Balance and play stats, the filterable game lobby and recent winners.
//! Requires a signed-in session; otherwise the player is sent to log in.

use dioxus::prelude::*;

use reelhouse_domain::{format_credits, GameCategory};

use crate::ui::presentation::components::icon::{Icon, IconKind};
use crate::ui::presentation::components::lobby::{GameCard, StatCard, WinnersList};
use crate::ui::presentation::helpers::time_helpers::greeting_at;
use crate::ui::presentation::services::use_lobby_service;
use crate::ui::presentation::state::SessionState;
use crate::ui::routes::Route;
use crate::ui::use_platform;

#[component]
pub fn DashboardView() -> Element {
    let lobby = use_lobby_service();
    let platform = use_platform();
    let session = use_context::<SessionState>();
    let navigator = use_navigator();

    let mut category: Signal<Option<GameCategory>> = use_signal(|| None);
    let mut query = use_signal(String::new);

    use_effect(move || {
        if !session.is_signed_in() {
            navigator.replace(Route::LoginRoute {});
        }
    });

    let Some(account) = session.account() else {
        return rsx! {
            div { class: "page-loading", "Redirecting to log in..." }
        };
    };

    let games = lobby.games(*category.read(), &query.read());
    let stats = lobby.stats();
    let greeting = greeting_at(platform.local_now());
    let active_category = *category.read();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "{greeting}, " span { class: "accent", {account.username.clone()} } }
                p { class: "muted", {account.email.clone()} }
            }

            section { class: "stat-grid",
                StatCard { label: "Balance", value: format_credits(stats.balance_cents), icon: IconKind::Wallet }
                StatCard { label: "Total wagered", value: format_credits(stats.wagered_cents), icon: IconKind::Gamepad }
                StatCard { label: "Biggest win", value: format_credits(stats.biggest_win_cents), icon: IconKind::Trophy }
                StatCard { label: "Games played", value: stats.games_played.to_string(), icon: IconKind::Check }
            }

            div { class: "dashboard-body",
                section { class: "lobby",
                    div { class: "lobby-toolbar",
                        div { class: "search",
                            Icon { kind: IconKind::Search, size: 16 }
                            input {
                                class: "search-input",
                                r#type: "search",
                                placeholder: "Search games or providers",
                                value: "{query}",
                                oninput: move |e| query.set(e.value()),
                            }
                        }
                        div { class: "chip-row",
                            button {
                                r#type: "button",
                                class: chip_class(active_category.is_none()),
                                onclick: move |_| category.set(None),
                                "All"
                            }
                            for option in GameCategory::ALL {
                                button {
                                    key: "{option:?}",
                                    r#type: "button",
                                    class: chip_class(active_category == Some(option)),
                                    onclick: move |_| category.set(Some(option)),
                                    {option.label()}
                                }
                            }
                        }
                    }

                    if games.is_empty() {
                        p { class: "muted empty-state", "No games match your search." }
                    }
                    div { class: "game-grid",
                        for game in games {
                            GameCard { key: "{game.id}", game: game.clone() }
                        }
                    }
                }

                WinnersList { wins: lobby.recent_wins() }
            }
        }
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "chip chip-selected"
    } else {
        "chip"
    }
}

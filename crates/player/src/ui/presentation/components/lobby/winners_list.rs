use dioxus::prelude::*;

use reelhouse_domain::{format_credits, RecentWin};

use super::super::icon::{Icon, IconKind};

/// Recent big wins, player names already masked
#[component]
pub fn WinnersList(wins: Vec<RecentWin>) -> Element {
    rsx! {
        aside { class: "winners",
            h2 { class: "winners-title",
                Icon { kind: IconKind::Trophy, size: 18 }
                "Recent winners"
            }
            if wins.is_empty() {
                p { class: "muted", "No wins yet today." }
            }
            ul { class: "winners-list",
                for (i, win) in wins.iter().enumerate() {
                    li { key: "{i}", class: "winner",
                        div {
                            p { class: "winner-player", {win.player.clone()} }
                            p { class: "winner-game", {win.game.clone()} }
                        }
                        span { class: "winner-amount", {format_credits(win.amount_cents)} }
                    }
                }
            }
        }
    }
}

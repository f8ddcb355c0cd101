use dioxus::prelude::*;

use reelhouse_domain::GameListing;

use super::super::icon::{Icon, IconKind};

#[component]
pub fn GameCard(game: GameListing) -> Element {
    let rtp = format!("{:.1}% RTP", game.rtp);
    let category_class = format!("game-art game-art-{}", game.category.as_str());
    let category = game.category.label();

    rsx! {
        article { class: "game-card",
            div { class: category_class,
                Icon { kind: IconKind::Gamepad, size: 32 }
            }
            div { class: "game-meta",
                h3 { class: "game-title", {game.title.clone()} }
                p { class: "game-provider", {game.provider.clone()} }
                div { class: "game-tags",
                    span { class: "tag", "{category}" }
                    span { class: "tag tag-muted", "{rtp}" }
                }
            }
        }
    }
}

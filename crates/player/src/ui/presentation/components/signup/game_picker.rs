use dioxus::prelude::*;

use reelhouse_domain::GAME_PREFERENCES;

/// Toggle chips for favourite games
#[component]
pub fn GamePicker(
    selected: Vec<String>,
    #[props(!optional)] error: Option<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        fieldset { class: "form-field game-picker",
            legend { class: "form-label", "Favourite games" }
            div { class: "chip-row",
                for game in GAME_PREFERENCES.iter().copied() {
                    button {
                        key: "{game}",
                        r#type: "button",
                        class: chip_class(&selected, game),
                        aria_pressed: is_selected(&selected, game).to_string(),
                        onclick: move |_| on_toggle.call(game.to_string()),
                        "{game}"
                    }
                }
            }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

fn is_selected(selected: &[String], game: &str) -> bool {
    selected.iter().any(|s| s == game)
}

fn chip_class(selected: &[String], game: &str) -> &'static str {
    if is_selected(selected, game) {
        "chip chip-selected"
    } else {
        "chip"
    }
}

use dioxus::prelude::*;

use super::super::icon::{Icon, IconKind};

#[component]
pub fn StatCard(#[props(into)] label: String, value: String, icon: IconKind) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-icon", Icon { kind: icon } }
            div {
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}

use dioxus::prelude::*;

use reelhouse_domain::SectionDescriptor;

use super::super::icon::{Icon, IconKind};

/// Collapsible section of the sign-up form
///
/// The body is only rendered while open; values live in the form state so
/// collapsing never loses input.
#[component]
pub fn SectionPanel(
    descriptor: &'static SectionDescriptor,
    open: bool,
    percent: f64,
    on_toggle: EventHandler<()>,
    children: Element,
) -> Element {
    let rounded = percent.round() as u8;
    let body_id = format!("section-{}", descriptor.id.index());
    let panel_class = if open { "section-panel open" } else { "section-panel" };
    let expanded = if open { "true" } else { "false" };

    rsx! {
        section { class: panel_class,
            button {
                class: "section-header",
                r#type: "button",
                aria_expanded: expanded,
                aria_controls: "{body_id}",
                onclick: move |_| on_toggle.call(()),
                div { class: "section-heading",
                    h2 { class: "section-title", {descriptor.title} }
                    p { class: "section-subtitle", {descriptor.subtitle} }
                }
                span { class: "section-percent", "{rounded}%" }
                span { class: "section-chevron", Icon { kind: IconKind::ChevronDown, size: 18 } }
            }
            if open {
                div { id: "{body_id}", class: "section-body", {children} }
            }
        }
    }
}

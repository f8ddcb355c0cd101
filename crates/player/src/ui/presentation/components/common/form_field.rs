//! Labelled inputs with an inline error slot

use dioxus::prelude::*;

use super::super::icon::{Icon, IconKind};

/// Text input with label, optional leading icon and inline error
#[component]
pub fn FormField(
    #[props(into)] id: String,
    #[props(into)] label: String,
    value: String,
    #[props(into, default = "text".to_string())] input_type: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] autocomplete: String,
    #[props(!optional)] icon: Option<IconKind>,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let error_id = format!("{}-error", id);
    let (field_class, invalid, described_by) = if error.is_some() {
        ("form-field form-field-invalid", "true", error_id.clone())
    } else {
        ("form-field", "false", String::new())
    };

    rsx! {
        div {
            class: field_class,
            label { r#for: "{id}", class: "form-label", "{label}" }
            div { class: "form-input-wrap",
                if let Some(kind) = icon {
                    span { class: "form-input-icon", Icon { kind: kind, size: 16 } }
                }
                input {
                    id: "{id}",
                    name: "{id}",
                    class: "form-input",
                    r#type: "{input_type}",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    autocomplete: "{autocomplete}",
                    aria_invalid: invalid,
                    aria_describedby: "{described_by}",
                    oninput: move |e| oninput.call(e.value()),
                }
            }
            if let Some(message) = error {
                p { id: "{error_id}", class: "form-error", "{message}" }
            }
        }
    }
}

/// Checkbox with an inline label and optional error
#[component]
pub fn CheckboxField(
    #[props(into)] id: String,
    checked: bool,
    #[props(!optional)] error: Option<String>,
    onchange: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-field form-checkbox",
            label { r#for: "{id}", class: "checkbox-label",
                input {
                    id: "{id}",
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |e| onchange.call(e.checked()),
                }
                span { {children} }
            }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

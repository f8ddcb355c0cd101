use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { class: "muted", "Nothing lives at " code { "{path}" } }
            Link { to: Route::HomeRoute {}, class: "btn btn-primary", "Back to the casino floor" }
        }
    }
}

//! Fallback for unknown routes.

use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    rsx! {
        crate::app::components::Page { title: "Not found",
            p { "Nothing lives at " code { "{path}" } "." }
        }
    }
}

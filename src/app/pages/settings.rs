//! Settings page.

use dioxus::prelude::*;

use crate::app::components::Page;

#[component]
pub fn Settings() -> Element {
    rsx! {
        Page { title: "Settings",
            p { class: "text-muted", "Calendar and account preferences." }
        }
    }
}

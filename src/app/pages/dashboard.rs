//! Dashboard page.

use dioxus::prelude::*;

use crate::app::components::Page;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Page { title: "Dashboard",
            p { class: "text-muted", "Your week at a glance." }
        }
    }
}

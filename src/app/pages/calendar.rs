//! Calendar page.

use dioxus::prelude::*;

use crate::app::components::Page;

#[component]
pub fn Calendar() -> Element {
    rsx! {
        Page { title: "Calendar",
            p { class: "text-muted", "Plan and review your schedule." }
        }
    }
}

//! Page frame used by every routed page.

use dioxus::prelude::*;

/// Sets the document title and renders the page heading.
#[component]
pub fn Page(
    /// Page title (shown in browser tab and as heading)
    title: String,
    /// Page content
    children: Element,
) -> Element {
    let full_title = format!("{} - Calendar", title);

    rsx! {
        document::Title { "{full_title}" }
        section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6",
            h1 { class: "text-2xl font-semibold mb-4", "{title}" }
            {children}
        }
    }
}

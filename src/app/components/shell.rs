//! Application shell: top bar, sidebar and page content.

use dioxus::prelude::*;

use super::icons::MenuIcon;
use super::sidebar::Sidebar;
use crate::app::shell_context::use_shell_provider;

/// Page frame owning the sidebar's open flag.
///
/// The menu control is a link to `?menu=open`, which the server renders
/// with the overlay open. With scripts the click toggles the flag in place.
#[component]
pub fn Shell(
    /// Current URL path
    path: String,
    /// Open state for the first render
    #[props(default)]
    initially_open: bool,
    /// Page content
    children: Element,
) -> Element {
    let shell = use_shell_provider(initially_open);
    let open = shell.is_open();
    let expanded = if open { "true" } else { "false" };

    // Route changes always land with the overlay closed
    let mut shown_path = use_signal(|| path.clone());
    use_effect(use_reactive((&path,), move |(path,)| {
        if *shown_path.peek() != path {
            shown_path.set(path);
            shell.set_open(false);
        }
    }));

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-40 h-16 flex items-center gap-3 px-4 bg-white dark:bg-[#0f172a] border-b border-gray-200 dark:border-gray-800 md:pl-68",
            a {
                class: "md:hidden p-2 rounded-lg text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800",
                href: "{path}?menu=open",
                role: "button",
                "aria-label": "Open sidebar",
                "aria-expanded": expanded,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    shell.set_open(true);
                },
                MenuIcon {}
            }
            strong { class: "text-lg", "Calendar" }
        }
        Sidebar {
            path: path.clone(),
            open,
            on_open_change: move |value| shell.set_open(value),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(path: &str, initially_open: bool) -> String {
        let path = path.to_string();
        dioxus::ssr::render_element(rsx! {
            Shell { path, initially_open, p { "content" } }
        })
    }

    #[test]
    fn shell_starts_closed() {
        let html = render("/dashboard", false);
        assert!(html.contains(r#"aria-label="Open sidebar""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains(r#"role="dialog""#));
        assert!(html.contains("content"));
    }

    #[test]
    fn menu_link_opens_overlay_without_scripts() {
        let closed = render("/calendar", false);
        assert!(closed.contains(r#"href="/calendar?menu=open""#));

        let open = render("/calendar", true);
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains(r#"role="dialog""#));
    }
}

//! Inline Lucide icons used by the shell.

use dioxus::prelude::*;

use crate::nav::Icon;

/// Render a Lucide outline icon.
#[component]
pub fn NavIcon(icon: Icon, #[props(default = 20)] size: u32) -> Element {
    let size = size.to_string();
    rsx! {
        svg {
            class: "shrink-0",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(icon)}
        }
    }
}

fn icon_paths(icon: Icon) -> Element {
    match icon {
        Icon::LayoutDashboard => rsx! {
            rect { x: "3", y: "3", width: "7", height: "9", rx: "1" }
            rect { x: "14", y: "3", width: "7", height: "5", rx: "1" }
            rect { x: "14", y: "12", width: "7", height: "9", rx: "1" }
            rect { x: "3", y: "16", width: "7", height: "5", rx: "1" }
        },
        Icon::CalendarRange => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M16 2v4" }
            path { d: "M3 10h18" }
            path { d: "M8 2v4" }
            path { d: "M17 14h-6" }
            path { d: "M13 18H7" }
            path { d: "M7 14h.01" }
            path { d: "M17 18h.01" }
        },
        Icon::CalendarCog => rsx! {
            path { d: "M21 10.5V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h6" }
            path { d: "M16 2v4" }
            path { d: "M8 2v4" }
            path { d: "M3 10h18" }
            circle { cx: "18", cy: "18", r: "3" }
            path { d: "m21.7 19.4-.9-.3" }
            path { d: "m15.2 16.9-.9-.4" }
            path { d: "m16.6 21.7.3-.9" }
            path { d: "m19.1 15.2.4-.9" }
        },
        Icon::LogOut => rsx! {
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", y1: "12", x2: "9", y2: "12" }
        },
    }
}

/// The "X" glyph on the overlay close button.
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "w-6 h-6",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}

/// Hamburger glyph for the host's menu button.
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "w-6 h-6",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M4 6h16M4 12h16M4 18h16",
            }
        }
    }
}

//! Navigation model and active-route resolution.
//!
//! The sidebar renders a fixed, ordered list of destinations. Which one is
//! highlighted is derived from the current URL path on every render.

pub mod focus;
pub mod visibility;

pub use focus::FocusGate;
pub use visibility::{DismissTrigger, OverlayState, VisibilityController, VisibilitySetter};

/// Segment that also owns the application root (`/`).
pub const HOME_SEGMENT: &str = "dashboard";

/// Icons drawn by the sidebar (Lucide outlines).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    CalendarRange,
    CalendarCog,
    LogOut,
}

/// A single sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    /// Route segment without the leading slash
    pub segment: &'static str,
    pub icon: Icon,
}

impl NavItem {
    /// Link target for this item.
    pub fn href(&self) -> String {
        format!("/{}", self.segment)
    }

    /// Whether this item is the active one for `path`.
    pub fn is_active(&self, path: &str) -> bool {
        is_active(path, self.segment)
    }
}

/// Sidebar destinations, in display order.
pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        title: "Dashboard",
        segment: "dashboard",
        icon: Icon::LayoutDashboard,
    },
    NavItem {
        title: "Calendar",
        segment: "calendar",
        icon: Icon::CalendarRange,
    },
    NavItem {
        title: "Settings",
        segment: "settings",
        icon: Icon::CalendarCog,
    },
];

/// Returns true if the item with route `segment` should be highlighted for `path`.
///
/// The home segment also matches the bare root path. Every segment matches
/// by prefix on `"/" + segment`. Paths are compared as given: callers pass
/// an already-normalized path (no trailing slash or case folding here).
pub fn is_active(path: &str, segment: &str) -> bool {
    if segment == HOME_SEGMENT && path == "/" {
        return true;
    }
    path.strip_prefix('/')
        .is_some_and(|rest| rest.starts_with(segment))
}

/// The highlighted item for `path`, if any.
pub fn active_item(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(path))
}

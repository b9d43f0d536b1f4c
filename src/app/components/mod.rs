//! Shared UI components for the Dioxus fullstack web UI.

pub mod icons;
pub mod page;
pub mod shell;
pub mod sidebar;

pub use page::Page;
pub use shell::Shell;
pub use sidebar::Sidebar;

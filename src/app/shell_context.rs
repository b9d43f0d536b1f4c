//! Host-owned sidebar state.
//!
//! The open/closed flag lives here, at the shell, not in the sidebar. The
//! sidebar gets the value and a setter and never writes the signal itself.

use dioxus::prelude::*;

/// Shared shell state via context
#[derive(Clone, Copy)]
pub struct ShellContext {
    sidebar_open: Signal<bool>,
}

impl ShellContext {
    /// Whether the mobile sidebar overlay is open
    pub fn is_open(&self) -> bool {
        (self.sidebar_open)()
    }

    /// Update the overlay flag (no-op write is skipped)
    pub fn set_open(&self, open: bool) {
        let mut sidebar_open = self.sidebar_open;
        if *sidebar_open.peek() != open {
            tracing::debug!(open, "sidebar visibility changed");
            sidebar_open.set(open);
        }
    }
}

/// Initialize shell context provider - call once in the shell
///
/// `initially_open` only seeds the signal; later renders ignore it.
pub fn use_shell_provider(initially_open: bool) -> ShellContext {
    let sidebar_open = use_signal(|| initially_open);
    use_context_provider(|| ShellContext { sidebar_open })
}

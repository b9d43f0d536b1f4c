//! Focus hand-off to the overlay close button.
//!
//! `FocusGate` watches the visibility flag and the close button's mount
//! events, and says when focus should move. The actual focus call lives in
//! the sidebar component because it needs the mounted element.

/// Tracks the open transition and whether the focus target exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusGate {
    was_open: bool,
    pending: bool,
    target_mounted: bool,
}

impl FocusGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current visibility flag after a render.
    ///
    /// Returns true when focus should move now: a false→true transition
    /// happened and the close button is already mounted. If it is not
    /// mounted yet the request stays pending until [`Self::target_mounted`].
    pub fn observe(&mut self, open: bool) -> bool {
        if open && !self.was_open {
            self.pending = true;
        }
        if !open {
            // Overlay unmounted; the close button went with it.
            self.pending = false;
            self.target_mounted = false;
        }
        self.was_open = open;
        self.take_if_ready()
    }

    /// The close button was mounted. Returns true when focus should move now.
    pub fn target_mounted(&mut self) -> bool {
        self.target_mounted = true;
        self.take_if_ready()
    }

    fn take_if_ready(&mut self) -> bool {
        if self.pending && self.target_mounted {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_mount_focuses_once() {
        let mut gate = FocusGate::new();
        assert!(!gate.observe(true), "target not mounted yet");
        assert!(gate.target_mounted());
        // Re-render while still open
        assert!(!gate.observe(true));
    }

    #[test]
    fn mount_then_observe_focuses() {
        let mut gate = FocusGate::new();
        assert!(!gate.target_mounted());
        assert!(gate.observe(true));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut gate = FocusGate::new();
        assert!(!gate.observe(true));
        assert!(!gate.observe(true));
        // Closed before the button ever mounted
        assert!(!gate.observe(false));
        // A later mount must not fire for the abandoned open
        assert!(!gate.target_mounted());
    }

    #[test]
    fn close_transition_does_nothing() {
        let mut gate = FocusGate::new();
        gate.observe(true);
        gate.target_mounted();
        assert!(!gate.observe(false));
    }

    #[test]
    fn every_reopen_focuses_again() {
        let mut gate = FocusGate::new();
        gate.observe(true);
        assert!(gate.target_mounted());
        gate.observe(false);

        assert!(!gate.observe(true));
        assert!(gate.target_mounted());
    }

    #[test]
    fn staying_closed_never_focuses() {
        let mut gate = FocusGate::new();
        assert!(!gate.observe(false));
        assert!(!gate.observe(false));
    }
}

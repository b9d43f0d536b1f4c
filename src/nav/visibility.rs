//! Open/closed state of the mobile overlay.
//!
//! The flag lives with the host. The sidebar only reads it and asks the
//! host to change it through the setter it was handed.

/// Mobile overlay state. The desktop panel does not depend on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

impl From<bool> for OverlayState {
    fn from(open: bool) -> Self {
        if open {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }
}

/// User interactions that dismiss the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    Backdrop,
    CloseButton,
    /// Any navigation link, in either layout
    NavLink,
}

impl DismissTrigger {
    /// Backdrop and close button only exist while the overlay is mounted.
    pub fn requires_overlay(self) -> bool {
        !matches!(self, DismissTrigger::NavLink)
    }
}

/// Receives visibility update requests on behalf of the host.
///
/// Closures work directly; components wrap their `EventHandler<bool>`.
pub trait VisibilitySetter {
    fn request(&self, open: bool);
}

impl<F: Fn(bool)> VisibilitySetter for F {
    fn request(&self, open: bool) {
        self(open)
    }
}

/// Read-only view of the host flag plus the host's setter.
#[derive(Clone, Copy)]
pub struct VisibilityController<S> {
    state: OverlayState,
    setter: S,
}

impl<S: VisibilitySetter> VisibilityController<S> {
    pub fn new(open: bool, setter: S) -> Self {
        Self {
            state: open.into(),
            setter,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the mobile overlay should be mounted.
    pub fn overlay_mounted(&self) -> bool {
        self.state.is_open()
    }

    /// Handle a dismiss interaction. Returns whether a request was issued.
    ///
    /// Overlay-only triggers cannot fire while closed, so they are ignored
    /// there. Link clicks always ask for `false`; the host setter is
    /// idempotent.
    pub fn dismiss(&self, trigger: DismissTrigger) -> bool {
        if trigger.requires_overlay() && !self.is_open() {
            tracing::trace!(?trigger, "dismiss ignored, overlay not mounted");
            return false;
        }
        tracing::debug!(?trigger, "requesting sidebar close");
        self.setter.request(false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> RefCell<Vec<bool>> {
        RefCell::new(Vec::new())
    }

    #[test]
    fn nav_link_click_closes_open_overlay() {
        let calls = recorder();
        let ctl = VisibilityController::new(true, |v| calls.borrow_mut().push(v));

        assert!(ctl.dismiss(DismissTrigger::NavLink));
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn backdrop_and_close_button_close_open_overlay() {
        for trigger in [DismissTrigger::Backdrop, DismissTrigger::CloseButton] {
            let calls = recorder();
            let ctl = VisibilityController::new(true, |v| calls.borrow_mut().push(v));
            assert!(ctl.dismiss(trigger));
            assert_eq!(*calls.borrow(), vec![false], "{trigger:?}");
        }
    }

    #[test]
    fn overlay_triggers_do_nothing_when_closed() {
        let calls = recorder();
        let ctl = VisibilityController::new(false, |v| calls.borrow_mut().push(v));

        assert!(!ctl.dismiss(DismissTrigger::Backdrop));
        assert!(!ctl.dismiss(DismissTrigger::CloseButton));
        assert!(calls.borrow().is_empty());
        assert!(!ctl.overlay_mounted());
    }

    #[test]
    fn desktop_link_click_still_requests_close() {
        let calls = recorder();
        let ctl = VisibilityController::new(false, |v| calls.borrow_mut().push(v));

        assert!(ctl.dismiss(DismissTrigger::NavLink));
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn state_follows_host_flag() {
        assert_eq!(OverlayState::from(true), OverlayState::Open);
        assert_eq!(OverlayState::from(false), OverlayState::Closed);
        assert_eq!(OverlayState::default(), OverlayState::Closed);
    }
}

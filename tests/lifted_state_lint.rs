//! Lifted-state lint - the sidebar never owns or writes its visibility flag.
//!
//! The open/closed flag belongs to the shell. The sidebar receives the value
//! plus `on_open_change` and must route every change through that handler.
//! The `nav` module holds the pure rules and stays free of UI framework code
//! so it can be tested without a renderer.

use std::fs;
use walkdir::WalkDir;

const SIDEBAR: &str = "src/app/components/sidebar.rs";

/// Patterns that mean the sidebar is reaching for the host's state directly.
const SIDEBAR_DISALLOWED: &[(&str, &str)] = &[
    ("use_shell(", "Take `open` and `on_open_change` as props instead"),
    ("ShellContext", "Take `open` and `on_open_change` as props instead"),
    (
        "use_signal(|| false)",
        "Visibility is host-owned; do not keep a local copy",
    ),
    (
        "use_signal(|| true)",
        "Visibility is host-owned; do not keep a local copy",
    ),
];

#[test]
fn sidebar_does_not_own_visibility() {
    let src = fs::read_to_string(SIDEBAR).expect("Failed to read sidebar component");

    let violations: Vec<String> = SIDEBAR_DISALLOWED
        .iter()
        .filter(|(pattern, _)| src.contains(pattern))
        .map(|(pattern, hint)| format!("  {pattern}: {hint}"))
        .collect();

    assert!(
        violations.is_empty(),
        "Sidebar must not own its visibility state:\n{}",
        violations.join("\n")
    );
}

#[test]
fn sidebar_closes_through_dismiss_triggers() {
    let src = fs::read_to_string(SIDEBAR).expect("Failed to read sidebar component");

    for trigger in ["NavLink", "Backdrop", "CloseButton"] {
        assert!(
            src.contains(&format!("DismissTrigger::{trigger}")),
            "Sidebar should dismiss via DismissTrigger::{trigger}"
        );
    }
    assert!(
        !src.contains("on_open_change.call(false)"),
        "Close requests go through VisibilityController::dismiss"
    );
}

#[test]
fn nav_rules_are_framework_free() {
    let mut checked = 0;
    for entry in WalkDir::new("src/nav")
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let src = fs::read_to_string(entry.path()).expect("Failed to read nav source");
        assert!(
            !src.contains("dioxus"),
            "{} should not depend on dioxus",
            entry.path().display()
        );
        checked += 1;
    }
    assert!(checked >= 3, "expected nav sources to scan, found {checked}");
}

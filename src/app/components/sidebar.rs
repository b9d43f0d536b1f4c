//! Responsive navigation sidebar.
//!
//! Two layouts share the same link list and sign-out button:
//! - desktop: always mounted, hidden below the `md` breakpoint
//! - mobile: a modal overlay, mounted only while the host says it is open
//!
//! The open flag belongs to the host. This component reads it and asks for
//! changes through `on_open_change`.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::try_router;

use super::icons::{CloseIcon, NavIcon};
use crate::auth::{self, AuthContext, SIGN_OUT_ENDPOINT, SIGN_OUT_REDIRECT};
use crate::nav::{
    DismissTrigger, FocusGate, Icon, VisibilityController, VisibilitySetter, NAV_ITEMS,
};

const LINK_CLASS: &str = "flex items-center gap-3 text-[#374151] dark:text-white hover:bg-[#e0e7ff] dark:hover:bg-[#4b5563] p-3 rounded-lg w-full text-left";
const ACTIVE_LINK_CLASS: &str = "bg-[#6366f1] text-white dark:text-[#0f172a] shadow-md";

/// Classes for a navigation link, with highlight when active.
pub fn link_class(active: bool) -> String {
    if active {
        format!("{LINK_CLASS} {ACTIVE_LINK_CLASS}")
    } else {
        LINK_CLASS.to_string()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Current URL path, as resolved by the router
    pub path: String,
    /// Whether the mobile overlay is open (owned by the host)
    pub open: bool,
    /// Asks the host to change `open`
    pub on_open_change: EventHandler<bool>,
    /// Page content
    pub children: Element,
}

/// Routes visibility requests to the host's `on_open_change`.
#[derive(Clone, Copy)]
pub struct HostSetter(EventHandler<bool>);

impl VisibilitySetter for HostSetter {
    fn request(&self, open: bool) {
        self.0.call(open)
    }
}

/// Controller the sidebar's click handlers dismiss through.
pub fn sidebar_controller(
    open: bool,
    on_open_change: EventHandler<bool>,
) -> VisibilityController<HostSetter> {
    VisibilityController::new(open, HostSetter(on_open_change))
}

/// Sidebar with desktop panel, mobile overlay and main content area.
///
/// Close controls are links back to `path`, so server-rendered pages can
/// close the overlay without scripts. With scripts the click is handled here.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let controller = sidebar_controller(props.open, props.on_open_change);
    let focus = use_close_focus(props.open);

    let on_navigate = move |_: ()| {
        controller.dismiss(DismissTrigger::NavLink);
    };

    rsx! {
        div { class: "flex h-screen",
            // Desktop sidebar
            aside {
                class: "hidden md:flex md:w-64 h-full flex-col justify-between pt-10 bg-[#f3f4f6] dark:bg-[#1e293b] text-black dark:text-white shadow-md",
                "data-layout": "desktop",
                div { class: "flex-1 flex flex-col",
                    NavLinks { path: props.path.clone(), on_navigate }
                }
                div { class: "px-2", SignOutButton {} }
            }

            main { class: "flex-1 bg-white dark:bg-[#0f172a] overflow-y-auto mt-16",
                {props.children}
            }

            if controller.overlay_mounted() {
                div {
                    class: "fixed inset-0 z-50 flex md:hidden",
                    role: "dialog",
                    "aria-modal": "true",
                    "data-layout": "mobile",
                    a {
                        class: "fixed inset-0 bg-black/50 backdrop-blur-sm",
                        href: "{props.path}",
                        tabindex: "-1",
                        "aria-hidden": "true",
                        "data-role": "backdrop",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            controller.dismiss(DismissTrigger::Backdrop);
                        },
                    }
                    div { class: "relative w-64 h-full bg-[#f3f4f6] dark:bg-[#1e293b] shadow-xl flex flex-col",
                        a {
                            class: "absolute top-4 right-4 p-2 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 rounded-full focus:outline-none focus:ring-2 focus:ring-blue-500",
                            href: "{props.path}",
                            role: "button",
                            "aria-label": "Close sidebar",
                            onmounted: move |evt: MountedEvent| {
                                focus.mounted(evt.data());
                            },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                controller.dismiss(DismissTrigger::CloseButton);
                            },
                            CloseIcon {}
                        }
                        div { class: "flex-1 flex flex-col pt-16 pb-4",
                            NavLinks { path: props.path.clone(), on_navigate }
                        }
                        div { class: "px-2 pb-4", SignOutButton {} }
                    }
                }
            }
        }
    }
}

/// The ordered link list, shared by both layouts.
///
/// Under a router, links navigate client-side; without one (server
/// rendering) they are plain anchors.
#[component]
fn NavLinks(path: String, on_navigate: EventHandler<()>) -> Element {
    let routed = try_router().is_some();

    rsx! {
        nav { class: "flex-1 flex flex-col px-2",
            ul { class: "space-y-2",
                for item in NAV_ITEMS.iter() {
                    {
                        let active = item.is_active(&path);
                        let aria_current = active.then_some("page");
                        rsx! {
                            li { key: "{item.title}",
                                if routed {
                                    Link {
                                        to: item.href(),
                                        class: link_class(active),
                                        aria_current: aria_current,
                                        onclick: move |_: MouseEvent| on_navigate.call(()),
                                        NavIcon { icon: item.icon }
                                        span { class: "text-base font-medium", "{item.title}" }
                                    }
                                } else {
                                    a {
                                        href: item.href(),
                                        class: link_class(active),
                                        "aria-current": aria_current,
                                        onclick: move |_: MouseEvent| on_navigate.call(()),
                                        NavIcon { icon: item.icon }
                                        span { class: "text-base font-medium", "{item.title}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Hand sign-out to the identity provider in context.
///
/// Failures are logged, not shown.
pub fn start_sign_out(auth: Option<AuthContext>) {
    let Some(auth) = auth else {
        tracing::warn!("Sign-out clicked but no identity provider is configured");
        return;
    };
    spawn(async move {
        let provider = auth.provider();
        if let Err(e) = auth::sign_out(&*provider).await {
            tracing::warn!("Sign-out failed: {}", e);
        }
    });
}

/// Sign-out form. Submits to the server endpoint when scripts are off;
/// otherwise the provider in context handles it.
#[component]
fn SignOutButton() -> Element {
    let auth = try_use_context::<AuthContext>();

    rsx! {
        form {
            action: SIGN_OUT_ENDPOINT,
            method: "get",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                start_sign_out(auth.clone());
            },
            input { r#type: "hidden", name: "redirect_url", value: SIGN_OUT_REDIRECT }
            button {
                r#type: "submit",
                class: "w-full flex items-center gap-3 px-4 py-3 mb-6 bg-[#d1d5db] text-black hover:bg-[#fee2e2] dark:hover:bg-[#7f1d1d] rounded-lg transition-colors cursor-pointer",
                NavIcon { icon: Icon::LogOut }
                span { class: "text-base font-medium", "Sign Out" }
            }
        }
    }
}

/// Moves focus to the overlay close button after each open transition.
#[derive(Clone, Copy)]
struct CloseFocus {
    gate: Signal<FocusGate>,
    target: Signal<Option<Rc<MountedData>>>,
}

impl CloseFocus {
    /// Feed the visibility flag after a render. Returns whether focus moved.
    fn observe(mut self, open: bool) -> bool {
        if !open {
            self.target.set(None);
        }
        let ready = self.gate.write().observe(open);
        if ready {
            self.focus();
        }
        ready
    }

    /// The close button mounted. Returns whether focus moved.
    fn mounted(mut self, data: Rc<MountedData>) -> bool {
        self.target.set(Some(data));
        let ready = self.gate.write().target_mounted();
        if ready {
            self.focus();
        }
        ready
    }

    fn focus(self) {
        let Some(target) = (*self.target.peek()).clone() else {
            return;
        };
        let request = target.set_focus(true);
        spawn(async move {
            if let Err(e) = request.await {
                tracing::debug!("Could not focus close button: {:?}", e);
            }
        });
    }
}

fn use_close_focus(open: bool) -> CloseFocus {
    let gate = use_signal(FocusGate::new);
    let target = use_signal(|| None);
    let focus = CloseFocus { gate, target };

    use_effect(use_reactive((&open,), move |(open,)| {
        focus.observe(open);
    }));

    focus
}

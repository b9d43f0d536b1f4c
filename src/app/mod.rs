//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod shell_context;

use crate::auth::{AuthContext, HostedSignOut};
use components::Shell;
use pages::{Calendar, Dashboard, NotFound, Settings};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Identity provider for the sidebar's sign-out button
    use_context_provider(|| AuthContext::new(HostedSignOut::default()));

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RoutedShell)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/calendar")]
        Calendar {},
        #[route("/settings")]
        Settings {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// The application root renders the dashboard.
#[component]
fn Home() -> Element {
    rsx! { Dashboard {} }
}

/// Layout that feeds the router's current path into the shell.
#[component]
fn RoutedShell() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Shell { path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_format_as_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Calendar {}.to_string(), "/calendar");
        assert_eq!(Route::Settings {}.to_string(), "/settings");
    }

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!("/calendar".parse::<Route>().ok(), Some(Route::Calendar {}));
        assert!(matches!(
            "/nope".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn routed_app_highlights_home_link() {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);

        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(r#"href="/settings""#));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"action="/auth/sign-out""#));
    }
}

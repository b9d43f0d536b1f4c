//! Calendar Shell
//!
//! The navigation shell of the calendar web app:
//! - Route model and active-item resolution (`nav`)
//! - Mobile overlay visibility and focus hand-off (`nav`)
//! - Sign-out delegation to the identity provider (`auth`)
//! - Dioxus components: sidebar, shell and pages (`app`)
//! - Server-rendered pages and the sign-out endpoint (`server`)

pub mod app;
pub mod auth;
pub mod nav;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

//! HTTP server: SSR pages, health check and the sign-out endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::app::components::Shell;
use crate::app::pages::{Calendar, Dashboard, NotFound, Settings};
use crate::auth::{
    is_local_redirect, AuthContext, HostedSignOut, SignOutRequest, SIGN_OUT_ENDPOINT,
    SIGN_OUT_REDIRECT,
};
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started: Instant::now(),
        }
    }
}

/// Build the application router with middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Pages
        .route("/", get(page_handler))
        .route("/dashboard", get(page_handler))
        .route("/calendar", get(page_handler))
        .route("/settings", get(page_handler))
        // Auth
        .route(SIGN_OUT_ENDPOINT, get(sign_out_handler))
        .fallback(page_handler)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "calendar-shell",
        version: env!("CALSHELL_VERSION"),
        git_sha: env!("CALSHELL_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` renders the mobile overlay open
    pub menu: Option<String>,
}

/// GET / /dashboard /calendar /settings - server-rendered shell + page
pub async fn page_handler(uri: Uri, Query(query): Query<PageQuery>) -> Response {
    let path = uri.path().to_string();
    let open = query.menu.as_deref() == Some("open");
    let status = if is_known_page(&path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    tracing::debug!(%path, %status, open, "rendering page");
    (status, Html(render_page(&path, open))).into_response()
}

fn is_known_page(path: &str) -> bool {
    matches!(path, "/" | "/dashboard" | "/calendar" | "/settings")
}

fn page_body(path: &str) -> Element {
    match path {
        "/" | "/dashboard" => rsx! { Dashboard {} },
        "/calendar" => rsx! { Calendar {} },
        "/settings" => rsx! { Settings {} },
        other => {
            let route: Vec<String> = other
                .trim_start_matches('/')
                .split('/')
                .map(str::to_string)
                .collect();
            rsx! { NotFound { route } }
        }
    }
}

/// Shell plus page body, with the browser sign-out provider in context.
#[component]
fn ServerPage(path: String, open: bool) -> Element {
    use_context_provider(|| AuthContext::new(HostedSignOut::default()));
    rsx! {
        Shell { path: path.clone(), initially_open: open, {page_body(&path)} }
    }
}

/// Render a full HTML document for `path`, with the overlay open if asked.
pub fn render_page(path: &str, open: bool) -> String {
    let path = path.to_string();
    let html = dioxus::ssr::render_element(rsx! {
        ServerPage { path, open }
    });
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Calendar</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{html}
</body>
</html>"#
    )
}

#[derive(Debug, Deserialize)]
pub struct SignOutQuery {
    pub redirect_url: Option<String>,
}

/// GET /auth/sign-out - end the session, then redirect
///
/// Offsite redirect targets are replaced by `/`. With a hosted provider
/// configured, the browser continues to the provider's sign-out page.
pub async fn sign_out_handler(
    State(state): State<AppState>,
    Query(query): Query<SignOutQuery>,
) -> Response {
    let target = match query.redirect_url {
        Some(url) if is_local_redirect(&url) => url,
        Some(url) => {
            tracing::warn!("Rejected sign-out redirect to {:?}", url);
            SIGN_OUT_REDIRECT.to_string()
        }
        None => SIGN_OUT_REDIRECT.to_string(),
    };

    let location = match state.config.auth.provider_sign_out_url {
        Some(ref provider) => HostedSignOut::new(provider.clone())
            .location_for(&SignOutRequest {
                redirect_url: target.clone(),
            })
            .unwrap_or(target),
        None => target,
    };

    let cookie = format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
        state.config.auth.session_cookie
    );
    tracing::info!(%location, "session cleared");

    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location), (header::SET_COOKIE, cookie)],
    )
        .into_response()
}

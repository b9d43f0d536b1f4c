//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Cookie cleared by `/auth/sign-out`
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Hosted identity-provider sign-out page. When set, `/auth/sign-out`
    /// forwards there instead of redirecting straight back to the app.
    #[serde(default)]
    pub provider_sign_out_url: Option<String>,
}

fn default_session_cookie() -> String {
    "__session".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: default_session_cookie(),
            provider_sign_out_url: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            auth: AuthConfig::default(),
        }
    }
}

/// Get config directory (CALSHELL_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("CALSHELL_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/calendar-shell");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("calendar-shell");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/calendar-shell");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("calendar-shell");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        .set_default("auth.session_cookie", default_session_cookie())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (CALSHELL_PORT, CALSHELL_AUTH__SESSION_COOKIE, etc.)
        .add_source(
            ::config::Environment::with_prefix("CALSHELL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: CALSHELL_PORT > PORT > config > default
    if std::env::var("CALSHELL_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;

    if let Some(ref url) = config.auth.provider_sign_out_url {
        url::Url::parse(url)
            .with_context(|| format!("auth.provider_sign_out_url is not a valid URL: {url}"))?;
    }

    Ok(config)
}

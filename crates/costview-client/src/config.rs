// ABOUTME: Configuration loading and validation for the costview shell.
// ABOUTME: Reads COSTVIEW_* environment variables and validates the backend base URL.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("COSTVIEW_BASE_URL is not a valid absolute URL: {0}")]
    InvalidBaseUrl(String),
}

/// Shell configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Backend origin relative request paths resolve against.
    pub base_url: reqwest::Url,
    /// Prefix view templates are served under.
    pub static_url: String,
    /// Path navigated to when the backend rejects the session.
    pub login_path: String,
    /// Name of the cookie carrying the anti-forgery token.
    pub csrf_cookie: String,
    /// Whether the admin view set is enabled (the full route table).
    pub admin_views: bool,
}

impl ShellConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - COSTVIEW_BASE_URL: backend origin (default: http://127.0.0.1:8000)
    /// - COSTVIEW_STATIC_URL: template prefix (default: /static/)
    /// - COSTVIEW_LOGIN_PATH: login redirect target (default: /login/)
    /// - COSTVIEW_CSRF_COOKIE: anti-forgery cookie name (default: csrftoken)
    /// - COSTVIEW_ADMIN_VIEWS: enable admin views (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_str = std::env::var("COSTVIEW_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let base_url: reqwest::Url = base_str
            .parse()
            .map_err(|_| ConfigError::InvalidBaseUrl(base_str))?;

        let static_url =
            std::env::var("COSTVIEW_STATIC_URL").unwrap_or_else(|_| "/static/".to_string());

        let login_path =
            std::env::var("COSTVIEW_LOGIN_PATH").unwrap_or_else(|_| "/login/".to_string());

        let csrf_cookie =
            std::env::var("COSTVIEW_CSRF_COOKIE").unwrap_or_else(|_| "csrftoken".to_string());

        let admin_views = std::env::var("COSTVIEW_ADMIN_VIEWS")
            .map(|v| v == "true" || v == "1" || v == "yes")
            .unwrap_or(false);

        Ok(Self {
            base_url,
            static_url,
            login_path,
            csrf_cookie,
            admin_views,
        })
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            base_url: reqwest::Url::parse("http://127.0.0.1:8000")
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            static_url: "/static/".to_string(),
            login_path: "/login/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            admin_views: false,
        }
    }
}

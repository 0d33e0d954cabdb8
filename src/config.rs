//! Server and backend configuration from environment variables.
//!
//! HOST, PORT: listen address (default 0.0.0.0:8080).
//! TOURNAMENT_SERVICE_URL, MATCHMAKING_SERVICE_URL, PLAYER_SERVICE_URL: backend base URLs.
//! BACKEND_TIMEOUT_SECS: per-request timeout for backend calls.

use reqwest::Url;
use std::time::Duration;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_tournament_service_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_matchmaking_service_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_player_service_url() -> String {
    "http://localhost:8083".to_string()
}

fn default_backend_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Errors reading the configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A backend base URL is not an http(s) URL.
    InvalidBaseUrl { var: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { var, value } => {
                write!(f, "{} is not an http(s) URL: {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Base URLs of the backend services.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackendUrls {
    pub tournament: String,
    pub matchmaking: String,
    pub player: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backends: BackendUrls,
    pub backend_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backends: BackendUrls {
                tournament: default_tournament_service_url(),
                matchmaking: default_matchmaking_service_url(),
                player: default_player_service_url(),
            },
            backend_timeout: default_backend_timeout(),
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Unparseable PORT/BACKEND_TIMEOUT_SECS fall back to defaults;
    /// an invalid base URL is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let backend_timeout = lookup("BACKEND_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(default_backend_timeout);
        let backends = BackendUrls {
            tournament: base_url(&lookup, "TOURNAMENT_SERVICE_URL", default_tournament_service_url)?,
            matchmaking: base_url(
                &lookup,
                "MATCHMAKING_SERVICE_URL",
                default_matchmaking_service_url,
            )?,
            player: base_url(&lookup, "PLAYER_SERVICE_URL", default_player_service_url)?,
        };
        Ok(Self {
            host,
            port,
            backends,
            backend_timeout,
        })
    }
}

/// Read `var` (or its default), validate it and drop trailing slashes so paths can be
/// appended with `/`.
fn base_url(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: fn() -> String,
) -> Result<String, ConfigError> {
    let raw = lookup(var).unwrap_or_else(default);
    let trimmed = raw.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl { var, value: raw }),
    }
}

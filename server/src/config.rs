//! Startup configuration read from the environment.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE: &str = "todos-session-id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`: expected an integer in 0..=65535")]
    InvalidPort(String),

    #[error("SESSION_COOKIE must be a non-empty token without `=`, `;`, or whitespace")]
    InvalidCookieName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_cookie: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `SESSION_COOKIE`, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let session_cookie = lookup("SESSION_COOKIE").unwrap_or(defaults.session_cookie);
        if session_cookie.is_empty()
            || session_cookie
                .chars()
                .any(|c| c == '=' || c == ';' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidCookieName);
        }

        Ok(Self {
            host,
            port,
            session_cookie,
        })
    }

    /// `host:port`, resolved by the listener so names like `localhost` work.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

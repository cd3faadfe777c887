//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `SITE_ROOT`: directory holding the compiled `pkg/` bundle, default
//!   `target/site`
//!
//! `.env` is loaded by `main` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("SITE_ROOT must not be empty")]
    EmptySiteRoot,
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. A blank `PORT` counts as
    /// unset; a blank `SITE_ROOT` is rejected with `EmptySiteRoot`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = match lookup("SITE_ROOT") {
            None => PathBuf::from(DEFAULT_SITE_ROOT),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySiteRoot),
            Some(raw) => PathBuf::from(raw.trim()),
        };
        Ok(Self { port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidPort {
            value: value.to_owned(),
            reason: e.to_string(),
        }),
    }
}

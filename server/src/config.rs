//! Bind address configuration parsed from environment variables.
//!
//! Leptos options (`[[workspace.metadata.leptos]]` or `LEPTOS_*` env vars)
//! supply the default `site_addr`; `HOST` and `PORT` override its parts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

/// Errors produced while reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 0-65535")]
    InvalidPort(String),

    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build the bind address from `HOST` / `PORT`, falling back to `defaults`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if either variable is set but unparsable.
    pub fn from_env(defaults: SocketAddr) -> Result<Self, ConfigError> {
        let ip = parse_host(std::env::var("HOST").ok().as_deref(), defaults.ip())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref(), defaults.port())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

/// Parse an optional port, treating unset or blank as `default`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPort` for non-numeric or out-of-range input.
pub fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

/// Parse an optional IP address, treating unset or blank as `default`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidHost` when the value is not an IP literal.
pub fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidHost(v.to_owned())),
    }
}

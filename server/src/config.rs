//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("invalid HOST '{0}'")]
    InvalidHost(String),

    /// `PORT` is not a number in `0..=65535`.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// A boolean switch holds something other than `true/false/1/0`.
    #[error("invalid boolean for {var}: '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site_root` when set.
    pub site_root: Option<String>,
    pub compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            site_root: None,
            compression: true,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    /// - `SITE_ROOT`: directory holding `pkg/` and public assets
    /// - `COMPRESSION`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns an error if any present variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(env_opt("HOST").as_deref())?;
        let port = parse_port(env_opt("PORT").as_deref())?;
        let site_root = env_opt("SITE_ROOT").filter(|v| !v.trim().is_empty());
        let compression = parse_flag("COMPRESSION", env_opt("COMPRESSION").as_deref(), true)?;

        Ok(Self { host, port, site_root, compression })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_HOST, str::trim);
    raw.parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(raw.to_string()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}

fn parse_flag(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: value.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

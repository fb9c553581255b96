//! Process configuration read from environment variables.

use crate::error::ConfigError;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/pets";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// From `BACKEND_PORT`.
    pub port: u16,
    /// From `DATABASE_URL`.
    pub database_url: String,
    /// From `DATABASE_MAX_CONNECTIONS`.
    pub max_connections: u32,
    /// From `MAX_BODY_BYTES`.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Unset or empty keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Ok(Self {
            port: parse_or("BACKEND_PORT", get("BACKEND_PORT"), defaults.port)?,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), defaults.max_body_bytes)?,
        })
    }

    /// All interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("BACKEND_PORT", "8080"),
            ("DATABASE_URL", "postgres://db/pets_test"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.database_url, "postgres://db/pets_test");
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let cfg = Config::from_lookup(lookup(&[("BACKEND_PORT", "  ")])).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("BACKEND_PORT", "http")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { var, value } => {
                assert_eq!(var, "BACKEND_PORT");
                assert_eq!(value, "http");
            }
        }
    }
}

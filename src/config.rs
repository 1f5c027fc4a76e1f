use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// # Server Configuration
///
/// Process-level settings read from the environment. A `.env` file, when
/// present, is loaded by the binary before this runs.
///
/// | Variable                | Default   |
/// |-------------------------|-----------|
/// | `HOST`                  | `0.0.0.0` |
/// | `PORT`                  | `8080`    |
/// | `WORKERS`               | CPU count |
/// | `MAX_BODY_BYTES`        | `262144`  |
/// | `SHUTDOWN_TIMEOUT_SECS` | `30`      |
/// | `RUST_LOG`              | `info`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub max_body_bytes: usize,
    pub shutdown_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or blank
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_var(&get, "PORT")?.unwrap_or(defaults.port),
            workers: parse_var(&get, "WORKERS")?.filter(|w: &usize| *w > 0),
            max_body_bytes: parse_var(&get, "MAX_BODY_BYTES")?
                .unwrap_or(defaults.max_body_bytes),
            shutdown_timeout_secs: parse_var(&get, "SHUTDOWN_TIMEOUT_SECS")?
                .unwrap_or(defaults.shutdown_timeout_secs),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_var<T, G>(get: &G, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), ("0.0.0.0", 8080));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("WORKERS", "4"),
            ("MAX_BODY_BYTES", "1024"),
            ("SHUTDOWN_TIMEOUT_SECS", "5"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), ("127.0.0.1", 9090));
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.shutdown_timeout_secs, 5);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("WORKERS", "0")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "http".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value \"http\" for PORT");
    }
}

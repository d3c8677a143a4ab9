//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{0}': expected host:port")]
    BindAddr(String),

    #[error("Invalid GENERATION_DELAY_MS '{0}': expected whole milliseconds")]
    Delay(String),
}

/// Settings read from the environment (after `.env` is loaded)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: SocketAddr,

    /// Directory holding the compiled WASM frontend
    pub static_dir: PathBuf,

    /// Artificial latency applied to every report generation
    pub generation_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("static"),
            generation_delay: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::BindAddr(raw))?,
            None => defaults.bind_addr,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let generation_delay = match lookup("GENERATION_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Delay(raw))?,
            None => defaults.generation_delay,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            generation_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.generation_delay, Duration::ZERO);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8000"),
            ("STATIC_DIR", "dist"),
            ("GENERATION_DELAY_MS", "1000"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.generation_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::BindAddr(_))
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("GENERATION_DELAY_MS", "soon")])),
            Err(ConfigError::Delay(_))
        ));
    }
}

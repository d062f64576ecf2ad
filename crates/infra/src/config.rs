//! Configuration loading and representation.
//!
//! Values come from environment variables; unset variables fall back to
//! defaults, malformed ones are an error.

use std::net::SocketAddr;
use std::str::FromStr;

use addressbook_core::DistanceFormula;

pub const ENV_BIND_ADDR: &str = "ADDRESSBOOK_BIND_ADDR";
pub const ENV_STORE: &str = "ADDRESSBOOK_STORE";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DISTANCE_FORMULA: &str = "ADDRESSBOOK_DISTANCE_FORMULA";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://address_book.db";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which [`crate::store::AddressStore`] implementation backs the service.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err("expected one of: sqlite, memory".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    /// Only read when `store` is [`StoreBackend::Sqlite`].
    pub database_url: String,
    pub distance_formula: DistanceFormula,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreBackend::Sqlite,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            distance_formula: DistanceFormula::Legacy,
        }
    }
}

impl Config {
    /// In-memory store, everything else default. Used by tests.
    pub fn in_memory(distance_formula: DistanceFormula) -> Self {
        Self {
            store: StoreBackend::Memory,
            distance_formula,
            ..Self::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, ENV_BIND_ADDR, DEFAULT_BIND_ADDR, |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;
        let store = parse_or(&lookup, ENV_STORE, "sqlite", StoreBackend::from_str)?;
        let distance_formula = parse_or(&lookup, ENV_DISTANCE_FORMULA, "legacy", |v| {
            v.parse::<DistanceFormula>().map_err(|e| e.to_string())
        })?;
        let database_url = lookup(ENV_DATABASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            bind_addr,
            store,
            database_url,
            distance_formula,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).filter(|v| !v.trim().is_empty());
    let value = raw.as_deref().unwrap_or(default);
    parse(value.trim()).map_err(|reason| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_every_key() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_STORE, "memory"),
            (ENV_DATABASE_URL, "sqlite::memory:"),
            (ENV_DISTANCE_FORMULA, "haversine"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.distance_formula, DistanceFormula::Haversine);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Config::from_lookup(lookup(&[(ENV_STORE, "  "), (ENV_DATABASE_URL, "")])).unwrap();
        assert_eq!(cfg.store, StoreBackend::Sqlite);
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[(ENV_DISTANCE_FORMULA, "flat-earth")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_DISTANCE_FORMULA));

        let err = Config::from_lookup(lookup(&[(ENV_BIND_ADDR, "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_BIND_ADDR));

        let err = Config::from_lookup(lookup(&[(ENV_STORE, "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == ENV_STORE));
    }
}

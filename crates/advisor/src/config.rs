//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const CATALOG_VAR: &str = "UNIMATCH_CATALOG";
pub const FAVORITES_VAR: &str = "UNIMATCH_FAVORITES";
pub const LATENCY_VAR: &str = "UNIMATCH_LATENCY_MS";

const DEFAULT_CATALOG: &str = "data/universities.json";
const DEFAULT_FAVORITES: &str = "favorites.json";

/// Settings shared by the service and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Catalog JSON file
    pub catalog_path: PathBuf,
    /// Backing file for the favorites store
    pub favorites_path: PathBuf,
    /// Artificial delay before each recommendation
    pub latency: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES),
            latency: Duration::ZERO,
        }
    }
}

impl AdvisorConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup(CATALOG_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let favorites_path = lookup(FAVORITES_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.favorites_path);

        let latency = match lookup(LATENCY_VAR) {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidLatency(value.clone()))?;
                Duration::from_millis(millis)
            }
            None => defaults.latency,
        };

        Ok(Self {
            catalog_path,
            favorites_path,
            latency,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("UNIMATCH_LATENCY_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidLatency(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AdvisorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("data/universities.json"));
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AdvisorConfig::from_lookup(lookup(&[
            (CATALOG_VAR, "/srv/catalog.json"),
            (FAVORITES_VAR, "/tmp/favs.json"),
            (LATENCY_VAR, "1500"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.favorites_path, PathBuf::from("/tmp/favs.json"));
        assert_eq!(config.latency, Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_latency() {
        let err = AdvisorConfig::from_lookup(lookup(&[(LATENCY_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLatency(value) if value == "soon"));
    }
}

// ============================================================================
// Configuration
// ============================================================================
// Lue depuis les variables d'environnement, surchargée ensuite par la CLI
//
//   DRAFTBOARD_API_BASE_URL   URL du backend        (http://localhost:8000)
//   DRAFTBOARD_REFETCH_SECS   refetch des vues      (300)
//   DRAFTBOARD_LOG_DIR        répertoire des logs   (./logs)
//
// Le timeout HTTP n'est pas configurable : 5 secondes pour tous les appels
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::query::options::REFETCH_INTERVAL;

pub const ENV_BASE_URL: &str = "DRAFTBOARD_API_BASE_URL";
pub const ENV_REFETCH: &str = "DRAFTBOARD_REFETCH_SECS";
pub const ENV_LOG_DIR: &str = "DRAFTBOARD_LOG_DIR";

/// Configuration d'exécution
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub refetch_interval: Duration,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refetch_interval: REFETCH_INTERVAL,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl Config {
    /// Lit la configuration depuis l'environnement du processus
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lit la configuration via une fonction de lookup
    ///
    /// CONCEPT RUST : Injection par closure
    /// - Les tests passent une HashMap au lieu de modifier l'environnement
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(secs) = lookup(ENV_REFETCH) {
            config.refetch_interval = parse_secs(ENV_REFETCH, &secs)?;
        }

        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Configuration du client API (timeout fixe)
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn parse_secs(name: &str, value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} doit être un nombre de secondes, reçu {:?}", name, value))?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.client_config().timeout, Duration::from_secs(5));
        assert_eq!(config.refetch_interval, Duration::from_secs(300));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://odds.example.com"),
            ("DRAFTBOARD_TIMEOUT_SECS", "10"),
            (ENV_REFETCH, "60"),
            (ENV_LOG_DIR, "/tmp/draftboard"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://odds.example.com");
        assert_eq!(config.refetch_interval, Duration::from_secs(60));
        assert_eq!(config.client_config().base_url, "https://odds.example.com");
        // Le timeout ne se surcharge pas
        assert_eq!(config.client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_refetch_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[(ENV_REFETCH, "five")]));
        assert!(result.is_err());
    }
}

//! Application configuration.
//!
//! Loaded from a TOML file under the platform config directory. A missing
//! or malformed file falls back to defaults so the app always starts.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use popcorn_api::OmdbConfig;

use crate::error::PopcornError;

const CONFIG_FILE: &str = "config.toml";
const WATCHED_FILE: &str = "watched.json";

/// Queries shorter than this many characters never hit the catalog.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the watched-list file; defaults to the platform data dir.
    pub watched_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the config file, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config");
                return Self::default();
            }
        };

        match toml::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    /// Write the config back to its platform location.
    pub fn save(&self) -> Result<(), PopcornError> {
        let path = config_path()
            .ok_or_else(|| PopcornError::Config("no config directory available".to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(self)
            .map_err(|e| PopcornError::Config(format!("failed to serialize config: {e}")))?;
        fs::write(&path, data)?;
        Ok(())
    }

    /// The file holding the watched list.
    pub fn watched_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.storage.watched_path {
            return Some(path.clone());
        }
        project_dirs().map(|dirs| dirs.data_dir().join(WATCHED_FILE))
    }

    /// Catalog client configuration derived from this config.
    pub fn omdb(&self) -> OmdbConfig {
        OmdbConfig {
            api_key: self.catalog.api_key.clone(),
            base_url: self.catalog.base_url.clone(),
            timeout_secs: self.catalog.timeout_secs,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "popcorn")
}

fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.catalog.api_key.is_empty());
        assert_eq!(config.search.min_query_chars, DEFAULT_MIN_QUERY_CHARS);
        assert!(config.storage.watched_path.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.catalog.api_key = "abc123".to_string();
        config.search.min_query_chars = 4;

        let data = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&data).unwrap();
        assert_eq!(parsed.catalog.api_key, "abc123");
        assert_eq!(parsed.search.min_query_chars, 4);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: AppConfig = toml::from_str("[catalog]\napi_key = \"k\"\n").unwrap();
        assert_eq!(parsed.catalog.api_key, "k");
        assert_eq!(parsed.search.min_query_chars, DEFAULT_MIN_QUERY_CHARS);
    }

    #[test]
    fn test_explicit_watched_path_wins() {
        let mut config = AppConfig::default();
        config.storage.watched_path = Some(PathBuf::from("/tmp/custom.json"));
        assert_eq!(
            config.watched_path(),
            Some(PathBuf::from("/tmp/custom.json"))
        );
    }
}

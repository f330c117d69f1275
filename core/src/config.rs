use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::SlideError;

/// Model identifier requested from the provider.
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";
pub const MODEL_ENV_VAR: &str = "SLIDE_MODEL";
pub const BASE_URL_ENV_VAR: &str = "SLIDE_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse TOML config {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings handed explicitly to the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: slide_chatgpt::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: display,
                source,
            })
        } else {
            serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: display,
                source,
            })
        }
    }

    /// Candidate config files, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("slide.config.toml"),
            PathBuf::from("slide.config.json"),
            PathBuf::from(".slide/config.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("slide").join("config.toml"));
        }
        paths
    }

    /// First readable config file, or defaults.
    pub fn load_with_fallback() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::debug!("Using default configuration");
        Self::default()
    }

    /// Overlay values from `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty(API_KEY_ENV_VAR) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty(MODEL_ENV_VAR) {
            self.model = model;
        }
        if let Some(base_url) = non_empty(BASE_URL_ENV_VAR) {
            self.base_url = base_url;
        }
        self
    }

    pub fn from_env() -> Self {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// The API key, or [`SlideError::CredentialMissing`] when absent or blank.
    pub fn require_api_key(&self) -> Result<&str, SlideError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SlideError::CredentialMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_target_groq_mixtral() {
        let config = Config::default();
        assert_eq!(config.model, "mixtral-8x7b-32768");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let config = Config {
            api_key: Some("from-file".into()),
            ..Config::default()
        }
        .apply_env(env(&[(API_KEY_ENV_VAR, "from-env"), (MODEL_ENV_VAR, "llama3-70b-8192")]));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.model, "llama3-70b-8192");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = Config::default().apply_env(env(&[(API_KEY_ENV_VAR, "  ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn missing_or_blank_key_is_credential_missing() {
        let mut config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(SlideError::CredentialMissing)
        ));
        config.api_key = Some("   ".into());
        assert!(matches!(
            config.require_api_key(),
            Err(SlideError::CredentialMissing)
        ));
        config.api_key = Some(" gsk_123 ".into());
        assert_eq!(config.require_api_key().unwrap(), "gsk_123");
    }

    #[test]
    fn loads_partial_toml_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slide.config.toml");
        std::fs::write(&path, "api_key = \"gsk_toml\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("gsk_toml"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slide.config.json");
        std::fs::write(&path, r#"{"model":"gemma-7b-it","base_url":"http://localhost:1234/v1"}"#)
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.model, "gemma-7b-it");
        assert_eq!(config.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "model = [").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}

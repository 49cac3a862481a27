//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/parascope/parascope.toml` (or `--config <FILE>`)
//! 3. Environment variables: `PARASCOPE_*` prefix (e.g. `PARASCOPE_BASE_URL`)
//! 4. Command-line flags (`--url`), applied by the CLI layer
//!
//! The bearer token never lives here: it comes from `--token` or `PARASCOPE_TOKEN`.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::infrastructure::http::{normalize_base_url, DEFAULT_BASE_URL};

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_url: Option<String>,
}

/// Unified configuration for parascope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// API root (default: production endpoint)
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Get the XDG config directory for parascope.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "parascope").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("parascope.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins if it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_url: overlay
                .base_url
                .clone()
                .unwrap_or_else(|| self.base_url.clone()),
        }
    }

    /// Load settings from the global config file, then env overrides.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply PARASCOPE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PARASCOPE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_url") {
            settings.base_url = val;
        }

        Ok(settings)
    }

    /// Replace the base URL with a flag value, if given.
    pub fn with_url_override(mut self, url: Option<&str>) -> Result<Self, ApplicationError> {
        if let Some(url) = url {
            self.base_url = url.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&mut self) -> Result<(), ApplicationError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        format!(
            r#"# parascope configuration
#
# Locations (by precedence, lowest to highest):
#   File:  ~/.config/parascope/parascope.toml (or --config <FILE>)
#   Env:   PARASCOPE_BASE_URL
#   Flag:  --url
#
# The API token is not read from this file.
# Use --token or the PARASCOPE_TOKEN environment variable.

# API root
# base_url = "{DEFAULT_BASE_URL}"
"#
        )
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

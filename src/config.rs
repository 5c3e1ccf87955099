//! Configuration management for cloudtmpl

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::paths::PathResolver;
use crate::template::SUGGESTION_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e))),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(Error::config("Unsupported config file format")),
        }
    }

    /// Load from `path`, or from the default location if it exists, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = PathResolver::default_config_file();
        if default_path.exists() {
            tracing::debug!("Loading config from {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)
                .map_err(|e| Error::config(format!("Failed to serialize to YAML: {}", e)))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize to TOML: {}", e)))?,
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize to JSON: {}", e)))?,
            _ => return Err(Error::config("Unsupported config file format")),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.global.verbosity > 3 {
            return Err(Error::config("Verbosity must be between 0 and 3"));
        }

        let threshold = self.registry.suggestion_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::config(
                "Suggestion threshold must be between 0.0 and 1.0",
            ));
        }

        Ok(())
    }
}

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Verbosity level (0-3)
    pub verbosity: u8,
    /// Enable colored output
    pub color: bool,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            color: true,
            log_file: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

/// Helper function for serde default = true
fn default_true() -> bool {
    true
}

fn default_threshold() -> f64 {
    SUGGESTION_THRESHOLD
}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Run the integrity self-check at startup
    #[serde(default = "default_true")]
    pub self_check: bool,
    /// Offer "did you mean" hints on unknown keys and entities
    #[serde(default = "default_true")]
    pub suggestions: bool,
    /// Minimum similarity for a hint
    #[serde(default = "default_threshold")]
    pub suggestion_threshold: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            self_check: true,
            suggestions: true,
            suggestion_threshold: SUGGESTION_THRESHOLD,
        }
    }
}

//! Engine configuration
//!
//! Loaded from a JSON file:
//!
//! ```json
//! { "shapes_dir": "./shapes", "log_level": "info" }
//! ```
//!
//! Every field is optional. Unknown fields are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::schema::{SchemaResult, ShapeRegistry};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory of named shape documents (optional)
    #[serde(default)]
    pub shapes_dir: Option<PathBuf>,

    /// Minimum log severity (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shapes_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Invalid(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        let shapes_dir = config
            .shapes_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("log_level", config.log_level.as_str()),
                ("shapes_dir", shapes_dir.as_str()),
            ],
        );

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        self.severity().map(|_| ())
    }

    /// Parsed log level
    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "unknown log_level '{}'. Expected one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Applies the log level to the process-wide logger.
    pub fn apply(&self) -> ConfigResult<()> {
        Logger::set_min_severity(self.severity()?);
        Ok(())
    }

    /// Builds the shape registry, loading `shapes_dir` when set.
    pub fn shape_registry(&self) -> SchemaResult<ShapeRegistry> {
        let mut registry = ShapeRegistry::new();
        if let Some(dir) = &self.shapes_dir {
            registry.load_dir(dir)?;
        }
        Ok(registry)
    }
}

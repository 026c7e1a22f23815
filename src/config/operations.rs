//! Config loading, discovery, and validation.

use super::model::Config;
use crate::error::{RegionError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = ".regiontoc.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RegionError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RegionError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Find `.regiontoc.yaml` in `start` or any of its ancestors and load it.
    ///
    /// Returns the default config when no file is found.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        match Self::find_config_file(start.as_ref()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Empty input means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RegionError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RegionError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `labels.unnamed` and `labels.empty` must be non-empty
    /// - every `markers` entry must have non-empty start and end patterns
    /// - every `language_globs` entry must name a language
    ///
    /// Regex syntax is checked later, when the marker table is compiled.
    pub fn validate(&self) -> Result<()> {
        if self.labels.unnamed.trim().is_empty() {
            return Err(RegionError::Config(
                "config validation failed: labels.unnamed must be non-empty".to_string(),
            ));
        }

        if self.labels.empty.trim().is_empty() {
            return Err(RegionError::Config(
                "config validation failed: labels.empty must be non-empty".to_string(),
            ));
        }

        for (language, patterns) in &self.markers {
            if language.trim().is_empty() {
                return Err(RegionError::Config(
                    "config validation failed: markers keys must be non-empty language ids"
                        .to_string(),
                ));
            }
            if patterns.start.is_empty() || patterns.end.is_empty() {
                return Err(RegionError::Config(format!(
                    "config validation failed: markers.{} needs both start and end patterns",
                    language
                )));
            }
        }

        for (glob, language) in &self.language_globs {
            if language.trim().is_empty() {
                return Err(RegionError::Config(format!(
                    "config validation failed: language_globs entry '{}' has an empty language",
                    glob
                )));
            }
        }

        Ok(())
    }
}

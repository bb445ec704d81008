//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated once after merging.

use crate::dataset::{DEFAULT_DATASET, DEFAULT_SPLIT};
use crate::providers::gemini::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use simpleqa_domain::DEFAULT_THRESHOLD;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("matcher.threshold must be between 0 and 100")]
    InvalidThreshold,

    #[error("model.name cannot be empty")]
    EmptyModelName,

    #[error("dataset.name cannot be empty")]
    EmptyDatasetName,

    #[error("model.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Dataset section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// Hugging Face dataset name
    pub name: String,
    /// Split to load
    pub split: String,
    /// Require a cached copy; never touch the network
    pub offline: bool,
}

impl Default for FileDatasetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DATASET.to_string(),
            split: DEFAULT_SPLIT.to_string(),
            offline: false,
        }
    }
}

/// Remote model section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Gemini model name
    pub name: String,
    /// Timeout in seconds for API calls
    pub timeout_seconds: Option<u64>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Matcher section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMatcherConfig {
    /// Minimum similarity score for a dataset answer to be used directly
    pub threshold: u8,
}

impl Default for FileMatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// REPL section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while a response is generated
    pub show_progress: bool,
    /// Path to the readline history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Output section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub dataset: FileDatasetConfig,
    pub model: FileModelConfig,
    pub matcher: FileMatcherConfig,
    pub repl: FileReplConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.matcher.threshold > 100 {
            return Err(ConfigValidationError::InvalidThreshold);
        }
        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.dataset.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDatasetName);
        }
        if self.model.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dataset.name, DEFAULT_DATASET);
        assert_eq!(config.dataset.split, "test");
        assert_eq!(config.matcher.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.model.name, DEFAULT_MODEL);
    }

    #[test]
    fn test_threshold_over_100_rejected() {
        let mut config = FileConfig::default();
        config.matcher.threshold = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidThreshold)
        ));
    }

    #[test]
    fn test_empty_model_name_rejected() {
        let mut config = FileConfig::default();
        config.model.name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.model.timeout_seconds = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [matcher]
            threshold = 90
            "#,
        )
        .unwrap();
        assert_eq!(config.matcher.threshold, 90);
        assert_eq!(config.dataset.name, DEFAULT_DATASET);
        assert!(config.repl.show_progress);
    }
}

//! Configuration for the interactive shell.
//!
//! Settings are read from a JSON file (by default
//! `<config dir>/taskstack/settings.json`). Every field is optional; a missing
//! file yields the defaults.
//!
//! # Example settings.json
//!
//! ```json
//! {
//!   "format": "json",
//!   "color": false,
//!   "showCreatedAt": true,
//!   "prompt": "> "
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskstackError};

/// How tasks and messages are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub color: bool,

    /// Print each task's creation time. Informational only.
    #[serde(default)]
    pub show_created_at: bool,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "Select an option: ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true, // Match the serde default
            show_created_at: false,
            prompt: default_prompt(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskstackError::Config`] if the file exists but cannot be
    /// read or parsed, and [`TaskstackError::InvalidConfig`] if a value is
    /// out of range.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskstackError::config_with_path(format!("cannot read settings: {e}"), path.into())
        })?;
        let config: ShellConfig = serde_json::from_str(&content).map_err(|e| {
            TaskstackError::config_with_path(format!("cannot parse settings: {e}"), path.into())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Default settings location, if the platform has a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskstack").join("settings.json"))
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskstackError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(TaskstackError::invalid_config(
                "prompt",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
        assert!(!config.show_created_at);
        assert_eq!(config.prompt, "Select an option: ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ShellConfig::load(&temp.path().join("settings.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, r#"{"format": "json", "showCreatedAt": true}"#).unwrap();

        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_created_at);
        assert!(config.color);
        assert_eq!(config.prompt, "Select an option: ");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ShellConfig::load(&path).unwrap_err();
        match err {
            TaskstackError::Config { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_empty_prompt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, r#"{"prompt": "  "}"#).unwrap();

        let err = ShellConfig::load(&path).unwrap_err();
        assert!(matches!(err, TaskstackError::InvalidConfig { ref field, .. } if field == "prompt"));
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, r#"{"format": "yaml"}"#).unwrap();
        assert!(ShellConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = ShellConfig::default_path() {
            assert!(path.ends_with("taskstack/settings.json"));
        }
    }
}

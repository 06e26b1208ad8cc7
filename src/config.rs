//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default `EnvFilter` directive when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "contact_form_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactFormConfig {
    /// Tracing filter directive (e.g. "contact_form_tui=debug")
    pub log_filter: Option<String>,
    /// Show the key hint line under the form
    pub show_help: Option<bool>,
    /// Copy the submission summary to the clipboard after each submit
    pub copy_summary_on_submit: Option<bool>,
}

impl ContactFormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: ContactFormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    pub fn copy_summary_on_submit(&self) -> bool {
        self.copy_summary_on_submit.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("contact-form-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = ContactFormConfig::default();
        assert!(config.log_filter.is_none());
        assert!(config.show_help.is_none());
        assert!(config.copy_summary_on_submit.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(config.show_help());
        assert!(!config.copy_summary_on_submit());
    }

    #[test]
    fn test_serialization() {
        let config = ContactFormConfig {
            log_filter: Some("contact_form_tui=debug".to_string()),
            show_help: Some(false),
            copy_summary_on_submit: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ContactFormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.log_filter(), "contact_form_tui=debug");
        assert_eq!(parsed.show_help, Some(false));
        assert_eq!(parsed.copy_summary_on_submit, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactFormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.log_filter.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"show_help": false, "unknown_field": "value"}"#;
        let parsed: ContactFormConfig = serde_json::from_str(json).unwrap();
        assert!(!parsed.show_help());
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = ContactFormConfig::load_from(&path).unwrap();
        assert!(config.show_help.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_config_path("roundtrip");
        let config = ContactFormConfig {
            copy_summary_on_submit: Some(true),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = ContactFormConfig::load_from(&path).unwrap();
        assert!(loaded.copy_summary_on_submit());
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(ContactFormConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}

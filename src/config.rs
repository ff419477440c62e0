//! Configuration loading and management
//!
//! Handles parsing of `.trackui.toml` in the data directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::form::DisabledOption;
use crate::prefs::{HINTS, SITE_PATH};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preference store configuration
    #[serde(default)]
    pub prefs: PrefsConfig,

    /// Item form configuration
    #[serde(default)]
    pub form: FormConfig,
}

/// Preference store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefsConfig {
    /// Key of the hints flag
    #[serde(default = "default_hints_key")]
    pub hints_key: String,

    /// Backing store: file or memory
    #[serde(default = "default_store")]
    pub store: String,

    /// Path scope written with each flag
    #[serde(default = "default_path")]
    pub path: String,

    /// Preference file name inside the data directory
    #[serde(default = "default_prefs_file")]
    pub file: String,
}

fn default_hints_key() -> String {
    HINTS.to_string()
}

fn default_store() -> String {
    "file".to_string()
}

fn default_path() -> String {
    SITE_PATH.to_string()
}

fn default_prefs_file() -> String {
    "prefs.json".to_string()
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            hints_key: default_hints_key(),
            store: default_store(),
            path: default_path(),
            file: default_prefs_file(),
        }
    }
}

/// Item form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Label of the placeholder shown in the story-parent selector for epics
    #[serde(default = "default_disabled_label")]
    pub disabled_option_label: String,

    /// Id of that placeholder option
    #[serde(default = "default_disabled_id")]
    pub disabled_option_id: String,
}

fn default_disabled_label() -> String {
    DisabledOption::default().label
}

fn default_disabled_id() -> String {
    DisabledOption::default().id
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            disabled_option_label: default_disabled_label(),
            disabled_option_id: default_disabled_id(),
        }
    }
}

impl FormConfig {
    pub fn disabled_option(&self) -> DisabledOption {
        DisabledOption {
            id: self.disabled_option_id.clone(),
            label: self.disabled_option_label.clone(),
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.disabled_option_id.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "form.disabled_option_id cannot be empty".to_string(),
            ));
        }
        if self.disabled_option_label.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "form.disabled_option_label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl PrefsConfig {
    fn validate(&self) -> crate::error::Result<()> {
        validate_key(&self.hints_key, "prefs.hints_key")?;

        match self.store.as_str() {
            "file" | "memory" => {}
            other => {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "prefs.store: invalid store '{other}' (expected file|memory)"
                )))
            }
        }

        if !self.path.starts_with('/') {
            return Err(crate::error::Error::InvalidConfig(format!(
                "prefs.path '{}' must be absolute",
                self.path
            )));
        }

        let file = self.file.trim();
        if file.is_empty() || file.contains('/') || file.contains('\\') {
            return Err(crate::error::Error::InvalidConfig(format!(
                "prefs.file '{}' must be a plain file name",
                self.file
            )));
        }

        Ok(())
    }
}

/// Flag keys end up as `key=value` segments, so they cannot carry the
/// separators.
pub fn validate_key(key: &str, field: &str) -> crate::error::Result<()> {
    if key.trim().is_empty() {
        return Err(crate::error::Error::InvalidConfig(format!(
            "{field}: key cannot be empty"
        )));
    }
    if key.contains(['=', ';']) || key.chars().any(char::is_whitespace) {
        return Err(crate::error::Error::InvalidConfig(format!(
            "{field}: key '{key}' cannot contain '=', ';' or whitespace"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from a `.trackui.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the data directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(crate::storage::CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.prefs.validate()?;
        self.form.validate()?;
        Ok(())
    }
}

//! Formcraft Settings
//!
//! Persistent application settings:
//! - Storage location of the blob store
//! - Logging filter and optional JSON log files
//!
//! Settings live in `<config_dir>/formcraft/settings.json`. Every section is
//! `#[serde(default)]`, so a partial or missing file yields defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod settings_file;

pub use settings_file::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormcraftSettings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

impl FormcraftSettings {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the default store directory
    pub data_dir: Option<PathBuf>,
}

impl StorageSettings {
    /// Directory the blob store should use
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => store_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Also write JSON logs to daily rolling files
    pub json_logs: bool,
    /// Overrides the default log directory
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json_logs: false,
            log_dir: None,
        }
    }
}

impl LoggingSettings {
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => log_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = FormcraftSettings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, FormcraftSettings::default());
        assert_eq!(settings.logging.filter, "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        let mut settings = FormcraftSettings::default();
        settings.storage.data_dir = Some(dir.path().join("store"));
        settings.logging.json_logs = true;
        settings.save_to(&path).unwrap();

        let loaded = FormcraftSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(
            loaded.storage.resolved_data_dir().unwrap(),
            dir.path().join("store")
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            indoc! {r#"
                {
                  "logging": { "filter": "formcraft=debug" }
                }
            "#},
        )
        .unwrap();

        let settings = FormcraftSettings::load_from(&path).unwrap();

        assert_eq!(settings.logging.filter, "formcraft=debug");
        assert!(!settings.logging.json_logs);
        assert_eq!(settings.storage, StorageSettings::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FormcraftSettings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings JSON"));
    }
}

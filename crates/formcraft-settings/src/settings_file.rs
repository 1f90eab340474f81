//! Settings file utilities

use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("formcraft"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("formcraft"))
}

/// Default directory of the file-backed blob store
pub fn store_dir() -> Result<PathBuf> {
    data_dir().map(|p| p.join("store"))
}

pub fn log_dir() -> Result<PathBuf> {
    data_dir().map(|p| p.join("logs"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("settings.json"))
}

/// Create the default config, data, store and log directories
pub fn ensure_directories() -> Result<()> {
    create_directories([config_dir()?, data_dir()?, store_dir()?, log_dir()?])
}

pub fn create_directories(dirs: impl IntoIterator<Item = PathBuf>) -> Result<()> {
    for dir in dirs {
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {:?}", dir))?;
            tracing::debug!(dir = %dir.display(), "created directory");
        }
    }
    Ok(())
}

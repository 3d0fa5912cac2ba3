//! User settings
//!
//! Stored as `settings.json` in the data directory, separate from the
//! shared key-value namespace.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::daily::SelectionConfig;
use crate::phrases::UserLanguage;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Language translations are shown in
    pub language: UserLanguage,
    pub show_translations: bool,
    pub selection: SelectionConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: UserLanguage::default(),
            show_translations: true,
            selection: SelectionConfig::default(),
        }
    }
}

fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

impl AppSettings {
    /// Load settings; a missing or unreadable file yields defaults
    pub fn load(data_dir: &Path) -> Self {
        match Self::try_load(data_dir) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(data_dir: &Path) -> Result<Self> {
        let path = settings_path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: AppSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(settings_path(data_dir), content)?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Seed new transcripts with the assistant greeting
    #[serde(default = "default_greeting_enabled")]
    pub greeting_enabled: bool,

    /// Say so when a command matched nothing, instead of the stock acknowledgement
    #[serde(default)]
    pub announce_unmatched: bool,

    #[serde(default = "default_write_preview")]
    pub write_preview: bool,

    /// Where preview.html is written; None means the temp directory
    #[serde(default)]
    pub preview_dir: Option<PathBuf>,
}

fn default_greeting_enabled() -> bool {
    true
}

fn default_write_preview() -> bool {
    true
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            greeting_enabled: default_greeting_enabled(),
            announce_unmatched: false,
            write_preview: default_write_preview(),
            preview_dir: None,
        }
    }
}

impl EngineSettings {
    /// Load settings from the default location, or create defaults if missing
    pub fn load() -> Self {
        let config_path = match Self::get_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                return Self::default();
            }
        };
        let settings = Self::load_from(&config_path);
        if !config_path.exists() {
            // Try to save defaults for next time
            if let Err(e) = settings.save_to(&config_path) {
                log::warn!("Could not write default settings: {}", e);
            }
        }
        settings
    }

    /// Load settings from `path`. Missing or unparsable files give defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> Result<PathBuf, AppError> {
        config_path_in(dirs::config_dir())
    }
}

fn config_path_in(config_dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let mut path = config_dir
        .ok_or_else(|| AppError::Settings("no config directory on this platform".to_string()))?;
    path.push("formforge");
    path.push("settings.json");
    Ok(path)
}

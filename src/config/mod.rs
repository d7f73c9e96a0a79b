//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use watchpane::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Watchpane";

/// Default playhead seek step for the arrow keys, in seconds.
pub const DEFAULT_SEEK_STEP_SECS: f32 = 10.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Whether the title (metadata) region is hidden.
    #[serde(default)]
    pub hide_metadata: Option<bool>,
    /// Whether the simplified layout (details and logo hidden) is active.
    #[serde(default)]
    pub simple_view: Option<bool>,
    /// Arrow-key seek step in seconds.
    #[serde(default)]
    pub seek_step_secs: Option<f32>,
    /// Last settings panel position, `"open"` or `"closed"`.
    /// Parsed leniently; an unrecognized value is treated as unknown.
    #[serde(default)]
    pub panel: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            hide_metadata: Some(false),
            simple_view: Some(false),
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            panel: Some("closed".to_string()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

//! JSON configuration file.
//!
//! Stored at `$XDG_CONFIG_HOME/xeyes-indicator/config.json`, falling back to
//! `$HOME/.config/xeyes-indicator/config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::constants::*;

/// Serializable config structure for JSON persistence.
///
/// Field names on disk are the kebab-case configuration keys. Missing fields
/// take their defaults and unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub(crate) struct Config {
    pub eye_width: i32,
    pub eye_height: i32,
    pub eye_spacing: i32,
    pub pupil_ratio: f64,
    pub update_interval: i32,
    pub eye_color: String,
    pub pupil_color: String,
    pub outline_color: String,
    pub update_policy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eye_width: DEFAULT_EYE_WIDTH,
            eye_height: DEFAULT_EYE_HEIGHT,
            eye_spacing: DEFAULT_EYE_SPACING,
            pupil_ratio: DEFAULT_PUPIL_RATIO,
            update_interval: DEFAULT_UPDATE_INTERVAL_MS,
            eye_color: DEFAULT_EYE_COLOR.to_string(),
            pupil_color: DEFAULT_PUPIL_COLOR.to_string(),
            outline_color: DEFAULT_OUTLINE_COLOR.to_string(),
            update_policy: DEFAULT_UPDATE_POLICY.to_string(),
        }
    }
}

/// Default config file path.
pub fn default_config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME")
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".config"))
        });

    match base {
        Some(dir) => dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Read and parse a config file.
pub(crate) fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize a config and write it, creating parent directories.
pub(crate) fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

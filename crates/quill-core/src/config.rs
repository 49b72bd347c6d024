//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which holds the API base URL and the last used username.
//!
//! Configuration is stored at `~/.config/quill/config.json`. The
//! `QUILL_BASE_URL` and `QUILL_DATA_DIR` environment variables override the
//! file and the default data directory.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "quill";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "QUILL_BASE_URL";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "QUILL_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// API base URL: the environment wins over the config file.
    pub fn base_url(&self) -> Result<String> {
        resolve_base_url(std::env::var(BASE_URL_ENV).ok(), self.base_url.as_deref())
    }

    /// Directory holding the persisted session and article state.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

fn resolve_base_url(env: Option<String>, file: Option<&str>) -> Result<String> {
    let non_empty = |url: &str| Some(url.trim()).filter(|u| !u.is_empty()).map(str::to_string);
    env.as_deref()
        .and_then(non_empty)
        .or_else(|| file.and_then(non_empty))
        .ok_or_else(|| {
            anyhow!(
                "No API base URL configured. Set {} or add \"base_url\" to the config file",
                BASE_URL_ENV
            )
        })
}

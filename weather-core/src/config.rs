use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::i18n::Locale;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Key baked in by `OPENWEATHER_API_KEY=... cargo build`, if any.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("OPENWEATHER_API_KEY");

/// Widget preferences stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// locale = "en"
/// dark_mode = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,

    /// UI language used on startup.
    pub locale: Locale,

    /// Start in dark mode.
    pub dark_mode: bool,

    /// Override for the OpenWeather host, e.g. a local proxy.
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from the config file, then the environment, then the build.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        pick_api_key(self.api_key.as_deref(), from_env.as_deref(), BUILD_TIME_API_KEY)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        let trimmed = api_key.trim();
        self.api_key = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }
}

fn pick_api_key(file: Option<&str>, env: Option<&str>, build: Option<&str>) -> Option<String> {
    [file, env, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

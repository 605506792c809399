use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::openweather::DEFAULT_BASE_URL;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Stored API key; the environment variable wins over it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Provider host override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
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
    pub fn save(&self) -> Result<PathBuf> {
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

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the stored API key. Blank keys clear it.
    pub fn set_api_key(&mut self, api_key: String) {
        let trimmed = api_key.trim();
        self.api_key = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().filter(|url| !url.trim().is_empty()).unwrap_or(DEFAULT_BASE_URL)
    }

    /// Resolve the credential from the process environment, falling back to the file.
    pub fn credential(&self) -> Option<String> {
        self.resolve_credential(std::env::var(API_KEY_ENV).ok())
    }

    /// Resolve the credential given the environment variable's value.
    ///
    /// Blank values count as absent.
    pub fn resolve_credential(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .into_iter()
            .chain(self.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_credential() {
        let cfg = Config::default();
        assert_eq!(cfg.resolve_credential(None), None);
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_wins_over_file() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_credential(Some("ENV_KEY".into())).as_deref(), Some("ENV_KEY"));
        assert_eq!(cfg.resolve_credential(None).as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn blank_environment_value_falls_back_to_file() {
        let cfg = Config { api_key: Some("FILE_KEY".into()), ..Default::default() };
        assert_eq!(cfg.resolve_credential(Some("   ".into())).as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn set_api_key_trims_and_clears() {
        let mut cfg = Config::default();
        cfg.set_api_key("  KEY \n".into());
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));

        cfg.set_api_key("".into());
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn toml_roundtrip_skips_unset_fields() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        assert!(text.contains("api_key"));
        assert!(!text.contains("base_url"));

        assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
    }

    #[test]
    fn base_url_override_parsed() {
        let cfg = Config::from_toml("base_url = \"http://localhost:8080\"").expect("parse");
        assert_eq!(cfg.base_url(), "http://localhost:8080");
        assert_eq!(cfg.api_key, None);
    }
}

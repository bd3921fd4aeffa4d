//! Configuration loading.
//!
//! The config file is optional; a missing file yields [`Config::default`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;

use crate::geo::DEFAULT_PROVIDERS;
use crate::shortcuts::{self, Shortcut, ShortcutEntry};
use crate::theme::ThemeMode;

pub const APP_DIR: &str = "ott-launcher";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub location: LocationConfig,
    pub shortcuts: Vec<ShortcutEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            location: LocationConfig::default(),
            shortcuts: shortcuts::default_entries(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub enabled: bool,
    pub timeout_secs: u64,
    /// Tried in order; the first to answer with a city or country wins.
    pub providers: Vec<String>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            providers: DEFAULT_PROVIDERS.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

impl LocationConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn provider_urls(&self) -> Result<Vec<Url>> {
        self.providers
            .iter()
            .map(|p| shortcuts::parse_web_url(p).context("Invalid location provider"))
            .collect()
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/ott-launcher/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Only the shortcuts are checked here. Location settings are best
    /// effort: a bad provider or timeout ends the lookup as `Unknown`.
    pub fn validate(&self) -> Result<()> {
        self.shortcuts()?;
        Ok(())
    }

    pub fn shortcuts(&self) -> Result<Vec<Shortcut>> {
        shortcuts::from_entries(&self.shortcuts)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.shortcuts().unwrap().len(), 4);
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn loads_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
theme = "dark"

[location]
enabled = true
timeout_secs = 3
providers = ["https://geo.example.com/json"]

[[shortcuts]]
name = "Example"
url = "https://example.com"
icon = "icons/example.png"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.location.timeout(), Duration::from_secs(3));
        assert_eq!(
            config.location.provider_urls().unwrap()[0].as_str(),
            "https://geo.example.com/json"
        );
        let shortcuts = config.shortcuts().unwrap();
        assert_eq!(shortcuts.len(), 1);
        assert_eq!(shortcuts[0].name, "Example");
    }

    #[test]
    fn partial_location_keeps_defaults() {
        let config = Config::from_toml("[location]\nenabled = false\n").unwrap();
        assert!(!config.location.enabled);
        assert_eq!(config.location.providers.len(), DEFAULT_PROVIDERS.len());
        assert_eq!(config.theme, ThemeMode::Auto);
    }

    #[test]
    fn rejects_empty_shortcut_list() {
        assert!(Config::from_toml("shortcuts = []\n").is_err());
    }

    #[test]
    fn rejects_bad_shortcut_url() {
        let toml = r#"
[[shortcuts]]
name = "Bad"
url = "ftp://example.com"
icon = "icons/bad.png"
"#;
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn bad_location_settings_still_load() {
        let config =
            Config::from_toml("[location]\nproviders = [\"ipapi.co/json\"]\ntimeout_secs = 0\n")
                .unwrap();
        assert!(config.location.provider_urls().is_err());
        assert_eq!(config.location.timeout(), Duration::ZERO);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::from_toml("theme = \"sepia\"\n").is_err());
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "theme = [").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}

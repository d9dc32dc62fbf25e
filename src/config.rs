// Application configuration.
// Loaded from an optional TOML file; every key falls back to its default.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL;
use crate::error::{ActivityError, Result};
use crate::github::client::GITHUB_API_BASE;

/// Number of feed records shown at most.
pub const DEFAULT_MAX_EVENTS: usize = 50;

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST API root.
    pub api_base: String,
    /// Value of the identifying User-Agent header.
    pub user_agent: String,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    pub max_events: usize,
    pub theme: ThemeName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            user_agent: "ghactivity-tui".to_string(),
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
            request_timeout_secs: 30,
            max_events: DEFAULT_MAX_EVENTS,
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Load from the default config path. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match crate::paths::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ActivityError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(ActivityError::Config("user_agent must not be empty".to_string()));
        }
        if self.max_events == 0 {
            return Err(ActivityError::Config("max_events must be at least 1".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ActivityError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("theme = \"light\"\nmax_events = 10\n");
        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.max_events, 10);
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let file = write_config("theme = ");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ActivityError::Config(_)));
    }

    #[test]
    fn test_zero_max_events_rejected() {
        let file = write_config("max_events = 0");
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ActivityError::Io(_)));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
    }
}

//! Configuration for firstline

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use firstwords::Screen;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,

    /// Milliseconds between tick events when no key is pressed
    pub tick_rate_ms: u64,

    /// Screen shown at launch
    pub start_screen: Screen,

    /// Settings for intros and affirmations
    pub words: firstwords::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            tick_rate_ms: 250,
            start_screen: Screen::Home,
            words: firstwords::Config::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .firstline.yml
        let local_config = PathBuf::from(".firstline.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/firstline/firstline.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("firstline").join("firstline.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Any failure here means "no level configured"; the full load reports it.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstwords::AffirmationStyle;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.start_screen, Screen::Home);
        assert!(config.log_level.is_none());
        assert_eq!(config.words.affirmations, AffirmationStyle::Rich);
    }

    #[test]
    fn test_load_nested_words_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("firstline.yml");
        fs::write(
            &path,
            "log-level: debug\nstart-screen: affirmation\nwords:\n  affirmations: simple\n  seed: 21\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.start_screen, Screen::Affirmation);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.words.affirmations, AffirmationStyle::Simple);
        assert_eq!(config.words.seed, Some(21));
    }

    #[test]
    fn test_explicit_path_errors_are_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        fs::write(&path, "tick-rate-ms: [not, a, number]\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }

    #[test]
    fn test_unknown_start_screen_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("firstline.yml");
        fs::write(&path, "start-screen: settings\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}

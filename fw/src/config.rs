//! Configuration for firstwords

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::affirmation::AffirmationStyle;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Affirmation pool per feeling: rich (three messages) or simple (one)
    pub affirmations: AffirmationStyle,

    /// Seed for the affirmation picker; unset means a fresh seed per run
    pub seed: Option<u64>,
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("firstwords").join("config.yml")),
            Some(PathBuf::from("firstwords.yml")),
        ];

        let candidates: Vec<PathBuf> = default_paths.into_iter().flatten().collect();
        Ok(Self::load_first(&candidates))
    }

    /// First candidate that exists and parses; broken files are skipped with a warning
    fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
        Config::default()
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!(?path, "Config::load_from_file: called");
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.affirmations, AffirmationStyle::Rich);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fw.yml");
        std::fs::write(&path, "affirmations: simple\nseed: 11\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.affirmations, AffirmationStyle::Simple);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fw.yml");
        std::fs::write(&path, "seed: 5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.affirmations, AffirmationStyle::Rich);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_broken_implicit_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.yml");
        let good = temp.path().join("good.yml");
        let missing = temp.path().join("missing.yml");
        std::fs::write(&broken, "affirmations: [rich, simple]\n").unwrap();
        std::fs::write(&good, "seed: 3\n").unwrap();

        let config = Config::load_first(&[missing.clone(), broken.clone(), good]);
        assert_eq!(config.seed, Some(3));

        let config = Config::load_first(&[broken, missing]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fw.yml");
        let config = Config {
            affirmations: AffirmationStyle::Simple,
            seed: Some(2),
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }
}

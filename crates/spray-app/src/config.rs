//! Configuration management for spray-calculator
//!
//! Config stored at: ~/.config/spray-calculator/config.toml

use serde::{Deserialize, Serialize};
use spray_types::{ConfigError, Language, OutputFormat, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "spray-calculator";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label and number format language (pl, en)
    #[serde(default)]
    pub language: Language,

    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Directory for history and favorites; platform data dir if unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Polish,
            output_format: OutputFormat::Table,
            data_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory where history and favorites are stored
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(ConfigError::from)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(ConfigError::from)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Spray Calculator Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(f, "Language:       {}", self.language)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.language, Language::Polish);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let config = Config {
            language: Language::English,
            output_format: OutputFormat::Json,
            data_dir: Some(dir.path().join("data")),
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("language = \"en\""));
        assert!(content.contains("output_format = \"json\""));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"en\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"de\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            spray_types::Error::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_store_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/spray-data")),
            ..Config::default()
        };
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/spray-data"));
    }
}

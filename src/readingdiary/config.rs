use crate::error::{DiaryError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the diary, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiaryConfig {
    /// chrono format used to read note dates (e.g. "%Y-%m-%d", "%d/%m/%Y")
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl DiaryConfig {
    /// Platform config directory, e.g. `~/.config/readingdiary` on Linux.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "readingdiary", "readingdiary")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DiaryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(DiaryError::Config("date_format cannot be empty".into()));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(DiaryError::Config(format!(
                "unknown log_level {:?}, expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiaryConfig::default();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DiaryConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, DiaryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join("nested");

        let config = DiaryConfig {
            date_format: "%d/%m/%Y".to_string(),
            log_level: "debug".to_string(),
        };
        config.save(&config_dir).unwrap();

        let loaded = DiaryConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"log_level": "info"}"#,
        )
        .unwrap();

        let loaded = DiaryConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"log_level": "loud"}"#,
        )
        .unwrap();

        let err = DiaryConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DiaryError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = DiaryConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DiaryError::Serialization(_)));
    }
}

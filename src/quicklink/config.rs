use crate::error::{QuicklinkError, Result};
use crate::model::{DateStyles, MEDIUM_DATETIME_PATTERN, MEDIUM_DATE_PATTERN, SHORT_TIME_PATTERN};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `quicklink config <key> <value>`.
pub const CONFIG_KEYS: &[&str] = &[
    "date-format",
    "time-format",
    "datetime-format",
    "read-clipboard",
    "copy-result",
];

/// Configuration for quicklink, stored as config.json in the config dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuicklinkConfig {
    /// Pattern for `{date}` without a format
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Pattern for `{time}` without a format
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Pattern for `{datetime}` without a format
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Read the system clipboard/selection when a template needs it
    #[serde(default = "default_true")]
    pub read_clipboard: bool,

    /// Copy every successfully processed URL to the clipboard
    #[serde(default)]
    pub copy_result: bool,
}

fn default_date_format() -> String {
    MEDIUM_DATE_PATTERN.to_string()
}

fn default_time_format() -> String {
    SHORT_TIME_PATTERN.to_string()
}

fn default_datetime_format() -> String {
    MEDIUM_DATETIME_PATTERN.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for QuicklinkConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            datetime_format: default_datetime_format(),
            read_clipboard: true,
            copy_result: false,
        }
    }
}

impl QuicklinkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = config_path.display().to_string(); "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: QuicklinkConfig = serde_json::from_str(&content)?;
        debug!(path = config_path.display().to_string(); "Loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn date_styles(&self) -> DateStyles {
        DateStyles {
            date: self.date_format.clone(),
            time: self.time_format.clone(),
            datetime: self.datetime_format.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "date-format" => Ok(self.date_format.clone()),
            "time-format" => Ok(self.time_format.clone()),
            "datetime-format" => Ok(self.datetime_format.clone()),
            "read-clipboard" => Ok(self.read_clipboard.to_string()),
            "copy-result" => Ok(self.copy_result.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "date-format" => self.date_format = value.to_string(),
            "time-format" => self.time_format = value.to_string(),
            "datetime-format" => self.datetime_format = value.to_string(),
            "read-clipboard" => self.read_clipboard = parse_bool(key, value)?,
            "copy-result" => self.copy_result = parse_bool(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(QuicklinkError::InvalidInput(format!(
            "{} expects true or false, got {}",
            key, value
        ))),
    }
}

fn unknown_key(key: &str) -> QuicklinkError {
    QuicklinkError::InvalidInput(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuicklinkConfig::default();
        assert_eq!(config.date_format, "MMM d, yyyy");
        assert!(config.read_clipboard);
        assert!(!config.copy_result);
        assert_eq!(config.date_styles(), DateStyles::default());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = QuicklinkConfig::default();
        config.set("date-format", "yyyy-MM-dd").unwrap();
        config.set("copy-result", "yes").unwrap();
        assert_eq!(config.get("date-format").unwrap(), "yyyy-MM-dd");
        assert_eq!(config.get("copy-result").unwrap(), "true");
        assert_eq!(config.date_styles().date, "yyyy-MM-dd");
    }

    #[test]
    fn test_invalid_values() {
        let mut config = QuicklinkConfig::default();
        assert!(config.set("read-clipboard", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = QuicklinkConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, QuicklinkConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("quicklink");

        let mut config = QuicklinkConfig::default();
        config.set("time-format", "HH:mm").unwrap();
        config.save(&nested).unwrap();

        let loaded = QuicklinkConfig::load(&nested).unwrap();
        assert_eq!(loaded.time_format, "HH:mm");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"copy_result": true}"#).unwrap();

        let loaded = QuicklinkConfig::load(temp_dir.path()).unwrap();
        assert!(loaded.copy_result);
        assert!(loaded.read_clipboard);
        assert_eq!(loaded.datetime_format, MEDIUM_DATETIME_PATTERN);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            QuicklinkConfig::load(temp_dir.path()),
            Err(QuicklinkError::Serialization(_))
        ));
    }
}

//! User settings for Hisaab
//!
//! Presentation preferences, the record source and the HTTP bind address.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::HisaabPaths;
use crate::error::HisaabError;

/// Where statement records are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// JSON collections under the data directory
    #[default]
    Files,
    /// The built-in demonstration fixture
    Sample,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Files => write!(f, "files"),
            DataSource::Sample => write!(f, "sample"),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// The `host:port` string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// User settings for Hisaab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix for every rendered amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name printed in statement headers and footers
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    #[serde(default)]
    pub data_source: DataSource,

    #[serde(default)]
    pub server: ServerSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs".to_string()
}

fn default_brand_name() -> String {
    "MyHisaab".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            brand_name: default_brand_name(),
            data_source: DataSource::default(),
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &HisaabPaths) -> Result<Self, HisaabError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| HisaabError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HisaabError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HisaabPaths) -> Result<(), HisaabError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HisaabError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HisaabError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "Rs");
        assert_eq!(settings.brand_name, "MyHisaab");
        assert_eq!(settings.data_source, DataSource::Files);
        assert_eq!(settings.server.bind_address(), "127.0.0.1:5001");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());

        let mut settings = Settings::default();
        settings.currency_symbol = "PKR".into();
        settings.data_source = DataSource::Sample;
        settings.server.port = 8080;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"currency_symbol": "$", "server": {"port": 9000}}"#).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.brand_name, "MyHisaab");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HisaabPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, HisaabError::Config(_)));
    }
}

//! Path management for Hisaab
//!
//! ## Path Resolution Order
//!
//! 1. `HISAAB_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/hisaab` or `~/.config/hisaab`
//! 3. Windows: `%APPDATA%\hisaab`

use std::path::{Path, PathBuf};

use crate::error::HisaabError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "HISAAB_DATA_DIR";

/// Manages all paths used by Hisaab
#[derive(Debug, Clone)]
pub struct HisaabPaths {
    base_dir: PathBuf,
}

impl HisaabPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, HisaabError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create HisaabPaths with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the record collections (`<base>/data`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), HisaabError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HisaabError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HisaabError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if `hisaab init` has been run (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HisaabError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                HisaabError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("hisaab"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HisaabError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HisaabError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("hisaab"))
}

//! Path management for the kiosk
//!
//! ## Path Resolution Order
//!
//! 1. `KIOSK_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `wasiat-kiosk`
//!    (`~/.config/wasiat-kiosk` on Linux, `%APPDATA%\wasiat-kiosk` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::KioskError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "KIOSK_DATA_DIR";

const APP_DIR_NAME: &str = "wasiat-kiosk";

/// Manages all paths used by the kiosk
#[derive(Debug, Clone)]
pub struct KioskPaths {
    base_dir: PathBuf,
}

impl KioskPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `KIOSK_DATA_DIR` is not set.
    pub fn new() -> Result<Self, KioskError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create KioskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session journal
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("journal.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), KioskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KioskError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the kiosk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, KioskError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| KioskError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

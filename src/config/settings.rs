//! Kiosk settings
//!
//! Branding, the simulated citizen whose MyKad is "inserted", and runtime
//! preferences. Every field has a serde default so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::KioskPaths;
use crate::error::KioskError;

/// The citizen shown on the simulated MyKad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenProfile {
    pub name: String,
    /// IC number in `YYMMDD-PB-###G` form
    pub ic_number: String,
}

impl Default for CitizenProfile {
    fn default() -> Self {
        Self {
            name: "AHMAD BIN ABDULLAH".to_string(),
            ic_number: "901212-01-1234".to_string(),
        }
    }
}

impl CitizenProfile {
    /// IC number with all but the last four digits hidden
    pub fn masked_ic(&self) -> String {
        let digits = self.ic_number.chars().filter(|c| c.is_ascii_digit()).count();
        let mut seen = 0;
        self.ic_number
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    seen += 1;
                    if seen + 4 <= digits {
                        return '*';
                    }
                }
                c
            })
            .collect()
    }
}

/// Kiosk settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Short agency code shown in the header
    #[serde(default = "default_agency_code")]
    pub agency_code: String,

    /// Agency name shown under the code
    #[serde(default = "default_agency_title")]
    pub agency_title: String,

    /// Product title shown on the menu
    #[serde(default = "default_kiosk_title")]
    pub kiosk_title: String,

    #[serde(default)]
    pub citizen: CitizenProfile,

    /// Whether session events are appended to the journal
    #[serde(default = "default_true")]
    pub journal_enabled: bool,

    /// Animation tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Ask before quitting while a registration is in progress
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_agency_code() -> String {
    "JPN".to_string()
}

fn default_agency_title() -> String {
    "Jabatan Pendaftaran Negara".to_string()
}

fn default_kiosk_title() -> String {
    "JPN Digital Kiosk".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            agency_code: default_agency_code(),
            agency_title: default_agency_title(),
            kiosk_title: default_kiosk_title(),
            citizen: CitizenProfile::default(),
            journal_enabled: true,
            tick_rate_ms: default_tick_rate_ms(),
            confirm_quit: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &KioskPaths) -> Result<Self, KioskError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KioskError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| KioskError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KioskPaths) -> Result<(), KioskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KioskError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KioskError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

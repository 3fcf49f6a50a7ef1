//! Custom error types for the kiosk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Screen;

/// The main error type for kiosk operations
#[derive(Error, Debug)]
pub enum KioskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The action is currently disabled (the equivalent of a greyed-out button)
    #[error("{0}")]
    Blocked(String),

    /// The selected kiosk service is not offered yet
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// An action was attempted on a screen that does not offer it
    #[error("Action belongs to the {expected} screen, but the {actual} screen is active")]
    WrongScreen { expected: Screen, actual: Screen },

    /// Session journal errors
    #[error("Journal error: {0}")]
    Journal(String),
}

impl KioskError {
    /// Create a "not found" error for beneficiaries
    pub fn beneficiary_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Beneficiary",
            identifier: format!("#{}", index + 1),
        }
    }

    /// Create a "not found" error for journal sessions
    pub fn session_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Session",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error only means "that control is disabled right now"
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Blocked(_) | Self::Unavailable(_) | Self::WrongScreen { .. }
        )
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for KioskError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for kiosk operations
pub type KioskResult<T> = Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KioskError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = KioskError::beneficiary_not_found(2);
        assert_eq!(err.to_string(), "Beneficiary not found: #3");
        assert!(err.is_not_found());
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_wrong_screen_error() {
        let err = KioskError::WrongScreen {
            expected: Screen::Assets,
            actual: Screen::Welcome,
        };
        assert_eq!(
            err.to_string(),
            "Action belongs to the Asset Distribution screen, but the Welcome screen is active"
        );
        assert!(err.is_rejection());
    }

    #[test]
    fn test_blocked_is_rejection() {
        let err = KioskError::Blocked("Insert your MyKad first".into());
        assert_eq!(err.to_string(), "Insert your MyKad first");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kiosk_err: KioskError = io_err.into();
        assert!(matches!(kiosk_err, KioskError::Io(_)));
    }
}

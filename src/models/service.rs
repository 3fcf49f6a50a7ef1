//! Kiosk services offered on the main menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// A service tile on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KioskService {
    MyKadReplacement,
    BirthCertificateExtract,
    MarriageDivorceInquiry,
    DigitalWill,
}

impl KioskService {
    /// All services in menu order
    pub const ALL: [KioskService; 4] = [
        KioskService::MyKadReplacement,
        KioskService::BirthCertificateExtract,
        KioskService::MarriageDivorceInquiry,
        KioskService::DigitalWill,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::MyKadReplacement => "MyKad Replacement",
            Self::BirthCertificateExtract => "Birth Certificate Extract",
            Self::MarriageDivorceInquiry => "Marriage/Divorce Inquiry",
            Self::DigitalWill => "Digital Will",
        }
    }

    /// Second line of the tile
    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::DigitalWill => "Wasiat Digital",
            _ => "Coming Soon",
        }
    }

    /// Only the Digital Will flow is implemented
    pub fn is_available(&self) -> bool {
        matches!(self, Self::DigitalWill)
    }
}

impl fmt::Display for KioskService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

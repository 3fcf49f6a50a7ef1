//! Executor choices
//!
//! Who unlocks and executes the will once death is confirmed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Digital executor options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutorChoice {
    SmartContract,
    AmanahRaya,
    PrivateIndividual,
}

impl ExecutorChoice {
    /// All choices in display order
    pub const ALL: [ExecutorChoice; 3] = [
        ExecutorChoice::SmartContract,
        ExecutorChoice::AmanahRaya,
        ExecutorChoice::PrivateIndividual,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::SmartContract => "The Smart Contract",
            Self::AmanahRaya => "Amanah Raya",
            Self::PrivateIndividual => "Private Individual",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::SmartContract => {
                "Automated digital executor that unlocks your will once death is confirmed through official government channels."
            }
            Self::AmanahRaya => "Government-backed trustee",
            Self::PrivateIndividual => "Appoint a trusted person (e.g., Spouse, Child, or Lawyer).",
        }
    }

    /// Bullet lines listed under the summary
    pub fn details(&self) -> &'static [&'static str] {
        match self {
            Self::SmartContract => &[],
            Self::AmanahRaya => &[
                "Automatic verification through JPN",
                "Legally recognized and protected",
            ],
            Self::PrivateIndividual => &[
                "Requirements: Executor must use the JPN Verification App",
                "Requires biometric verification for access",
            ],
        }
    }

    /// Whether the kiosk highlights this option
    pub fn is_recommended(&self) -> bool {
        matches!(self, Self::AmanahRaya)
    }
}

impl fmt::Display for ExecutorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

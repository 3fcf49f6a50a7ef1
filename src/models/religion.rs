//! Religion profile
//!
//! The profile decides how much of the estate may be distributed by will.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::percent::Percent;

/// Religion selected on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Religion {
    /// Wasiat is limited to one third; Faraid allocates the rest
    Muslim,
    /// The whole estate may be distributed
    NonMuslim,
}

impl Religion {
    /// Maximum total allocation for this profile
    pub fn cap(&self) -> Percent {
        match self {
            Religion::Muslim => Percent::WASIAT,
            Religion::NonMuslim => Percent::FULL,
        }
    }

    /// Cap for an optional selection (unset behaves as non-Muslim)
    pub fn cap_for(religion: Option<Religion>) -> Percent {
        religion.map(|r| r.cap()).unwrap_or(Percent::FULL)
    }

    /// Label shown on the selection buttons
    pub fn label(&self) -> &'static str {
        match self {
            Religion::Muslim => "Muslim",
            Religion::NonMuslim => "Non-Muslim",
        }
    }

    /// Heading of the allocation meter on the assets screen
    pub fn allocation_heading(&self) -> &'static str {
        match self {
            Religion::Muslim => "Wasiat Portion (1/3) Allocation",
            Religion::NonMuslim => "Total Assets Allocation",
        }
    }
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps() {
        assert_eq!(Religion::Muslim.cap(), Percent::WASIAT);
        assert_eq!(Religion::NonMuslim.cap(), Percent::FULL);
        assert_eq!(Religion::cap_for(None), Percent::FULL);
        assert_eq!(Religion::cap_for(Some(Religion::Muslim)), Percent::WASIAT);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Religion::NonMuslim).unwrap();
        assert_eq!(json, "\"non-muslim\"");
        let parsed: Religion = serde_json::from_str("\"muslim\"").unwrap();
        assert_eq!(parsed, Religion::Muslim);
    }
}

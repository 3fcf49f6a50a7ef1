//! Beneficiary model
//!
//! A named recipient of a share of the estate.

use serde::{Deserialize, Serialize};

use super::percent::Percent;

/// A beneficiary and the share allocated to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Display name (may be empty while the citizen is still typing)
    pub name: String,

    /// Allocated share
    pub share: Percent,
}

impl Beneficiary {
    /// Create a new beneficiary
    pub fn new(name: impl Into<String>, share: Percent) -> Self {
        Self {
            name: name.into(),
            share,
        }
    }

    /// A freshly added, unnamed beneficiary at 0%
    pub fn blank() -> Self {
        Self::new("", Percent::zero())
    }

    /// Name to show in lists, with a placeholder for blank names
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(unnamed)"
        } else {
            &self.name
        }
    }
}

/// The two beneficiaries every new session starts with
pub fn default_beneficiaries() -> Vec<Beneficiary> {
    vec![
        Beneficiary::new("Mother", Percent::from_whole(50)),
        Beneficiary::new("Father", Percent::from_whole(50)),
    ]
}

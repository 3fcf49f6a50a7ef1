//! Witness verification
//!
//! Each witness inserts their IC first and then scans a fingerprint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KioskError, KioskResult};

/// Which of the two witnesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WitnessSlot {
    First,
    Second,
}

impl WitnessSlot {
    pub const ALL: [WitnessSlot; 2] = [WitnessSlot::First, WitnessSlot::Second];

    /// Array index of this slot
    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The other witness
    pub fn other(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for WitnessSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Witness {}", self.index() + 1)
    }
}

/// Two-step verification state of one witness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessCheck {
    /// Step 1: IC inserted into the reader
    pub card_inserted: bool,
    /// Step 2: fingerprint matched
    pub verified: bool,
}

impl WitnessCheck {
    /// Simulate the witness inserting their IC; returns false if already done
    pub fn insert_card(&mut self) -> bool {
        let changed = !self.card_inserted;
        self.card_inserted = true;
        changed
    }

    /// Whether the fingerprint step is currently offered
    pub fn can_scan(&self) -> bool {
        self.card_inserted && !self.verified
    }

    /// Simulate the fingerprint scan
    pub fn scan_fingerprint(&mut self) -> KioskResult<bool> {
        if !self.card_inserted {
            return Err(KioskError::Blocked(
                "Complete Step 1 first: insert the witness IC".into(),
            ));
        }
        let changed = !self.verified;
        self.verified = true;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_requires_card() {
        let mut check = WitnessCheck::default();
        assert!(!check.can_scan());
        assert!(check.scan_fingerprint().is_err());
        assert!(!check.verified);

        assert!(check.insert_card());
        assert!(check.can_scan());
        assert!(check.scan_fingerprint().unwrap());
        assert!(check.verified);
        assert!(!check.can_scan());
    }

    #[test]
    fn test_repeat_steps_report_no_change() {
        let mut check = WitnessCheck::default();
        check.insert_card();
        assert!(!check.insert_card());
        check.scan_fingerprint().unwrap();
        assert!(!check.scan_fingerprint().unwrap());
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(WitnessSlot::First.to_string(), "Witness 1");
        assert_eq!(WitnessSlot::Second.other(), WitnessSlot::First);
    }
}

//! Wizard screens
//!
//! The kiosk walks a fixed, ordered list of screens. The menu is the entry
//! point and sits outside the numbered progress stepper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Menu,
    Welcome,
    Biometric,
    Religion,
    Assets,
    Documents,
    Executor,
    Witnesses,
    Success,
}

impl Screen {
    /// All screens in walk order
    pub const ALL: [Screen; 9] = [
        Screen::Menu,
        Screen::Welcome,
        Screen::Biometric,
        Screen::Religion,
        Screen::Assets,
        Screen::Documents,
        Screen::Executor,
        Screen::Witnesses,
        Screen::Success,
    ];

    /// Number of numbered steps in the progress stepper
    pub const STEP_COUNT: usize = 8;

    /// Position in the walk order (menu is 0)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Step number shown in the progress stepper (menu is step 0)
    pub fn step_number(&self) -> usize {
        self.index()
    }

    /// Whether the progress stepper is shown on this screen
    pub fn shows_stepper(&self) -> bool {
        !matches!(self, Screen::Menu)
    }

    /// The next screen in walk order
    pub fn next(&self) -> Option<Screen> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The previous screen in walk order
    pub fn previous(&self) -> Option<Screen> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Heading shown at the top of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Main Menu",
            Screen::Welcome => "Welcome",
            Screen::Biometric => "Biometric Verification",
            Screen::Religion => "User Profile",
            Screen::Assets => "Asset Distribution",
            Screen::Documents => "Document Evidence Upload",
            Screen::Executor => "Select Digital Executor",
            Screen::Witnesses => "Witness Authentication",
            Screen::Success => "Registration Complete",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

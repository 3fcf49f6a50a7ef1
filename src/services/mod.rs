//! Service layer for the kiosk
//!
//! The service layer holds the registration rules on top of the plain
//! models: the capped share arithmetic and the screen-by-screen wizard.

pub mod allocation;
pub mod wizard;

pub use allocation::{clamp_share, Allocation};
pub use wizard::Wizard;

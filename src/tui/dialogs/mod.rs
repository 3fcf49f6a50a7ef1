//! Dialog modules for the TUI
//!
//! Modal overlays drawn above the current screen

pub mod confirm;
pub mod help;

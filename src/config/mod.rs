//! Configuration module for the kiosk
//!
//! This module provides configuration management including:
//! - Platform path resolution for settings and the session journal
//! - Kiosk settings persistence

pub mod paths;
pub mod settings;

pub use paths::KioskPaths;
pub use settings::{CitizenProfile, Settings};

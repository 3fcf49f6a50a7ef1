//! Wasiat Kiosk - terminal simulation of a Digital Will registration kiosk
//!
//! The kiosk walks a citizen through card insertion, a simulated biometric
//! scan, religion selection, beneficiary allocation under the Wasiat cap,
//! document upload stubs, executor selection and two-witness verification.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (percentages, screens, beneficiaries, etc.)
//! - `services`: The allocation rule and the wizard state machine
//! - `journal`: Append-only session journal
//! - `cli` / `display`: Journal subcommands and their formatting
//! - `tui`: The full-screen kiosk interface
//!
//! # Example
//!
//! ```rust
//! use wasiat_kiosk::models::{KioskService, Screen};
//! use wasiat_kiosk::services::Wizard;
//!
//! let mut wizard = Wizard::new();
//! wizard.select_service(KioskService::DigitalWill)?;
//! assert_eq!(wizard.screen(), Screen::Welcome);
//! assert!(!wizard.can_advance());
//! # Ok::<(), wasiat_kiosk::KioskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod journal;
pub mod models;
pub mod services;
pub mod tui;

pub use error::KioskError;

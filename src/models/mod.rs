//! Core data models for the kiosk
//!
//! This module contains the data structures of the Digital Will flow:
//! screens, shares, beneficiaries, executor and witness state.

pub mod beneficiary;
pub mod document;
pub mod executor;
pub mod ids;
pub mod percent;
pub mod religion;
pub mod screen;
pub mod service;
pub mod witness;

pub use beneficiary::{default_beneficiaries, Beneficiary};
pub use document::{DocumentKind, UploadedDocuments};
pub use executor::ExecutorChoice;
pub use ids::{RegistrationRef, SessionId};
pub use percent::Percent;
pub use religion::Religion;
pub use screen::Screen;
pub use service::KioskService;
pub use witness::{WitnessCheck, WitnessSlot};

//! Terminal User Interface module
//!
//! This module drives the kiosk screens with ratatui: one view per wizard
//! screen, a progress stepper, toasts and modal dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;

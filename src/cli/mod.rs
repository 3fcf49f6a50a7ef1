//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the journal and
//! display layers.

pub mod journal;

pub use journal::{handle_journal_command, JournalCommands};

//! Session journal for the kiosk
//!
//! Records every state change of a wizard session in an append-only journal.
//!
//! # Architecture
//!
//! - `JournalEvent`: what happened (screen entered, card detected, share
//!   changed, registration completed, ...).
//! - `JournalEntry`: an event stamped with its session and a UTC timestamp.
//! - `JournalLogger`: writes entries to the journal file in line-delimited
//!   JSON (JSONL) and reads them back for the `journal` CLI commands.
//!
//! # Example
//!
//! ```rust,ignore
//! use wasiat_kiosk::journal::JournalLogger;
//!
//! let logger = JournalLogger::new(paths.journal_file());
//! logger.log_batch(&wizard.drain_events())?;
//! ```

mod entry;
mod logger;

pub use entry::{JournalEntry, JournalEvent};
pub use logger::JournalLogger;

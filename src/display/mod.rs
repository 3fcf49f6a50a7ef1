//! Display formatting for terminal output
//!
//! Formats journal data for the `journal` subcommands.

pub mod journal;

pub use journal::{
    format_journal_entries, format_session_summaries, summarize_sessions, OutputFormat,
    SessionSummary,
};

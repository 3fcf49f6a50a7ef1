//! Journal CLI commands
//!
//! Read-only access to the session journal written by the kiosk UI.

use clap::Subcommand;

use crate::display::{format_journal_entries, format_session_summaries, summarize_sessions, OutputFormat};
use crate::error::KioskResult;
use crate::journal::JournalLogger;

/// Journal subcommands
#[derive(Subcommand)]
pub enum JournalCommands {
    /// List journal entries
    List {
        /// Number of most recent entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Only show entries of this session (full or short id)
        #[arg(short, long)]
        session: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Summarize recorded sessions
    Sessions {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Handle a journal command
pub fn handle_journal_command(logger: &JournalLogger, cmd: JournalCommands) -> KioskResult<()> {
    match cmd {
        JournalCommands::List {
            limit,
            session,
            format,
        } => {
            let entries = match session {
                Some(session) => {
                    let mut entries = logger.read_session(&session)?;
                    let start = entries.len().saturating_sub(limit);
                    entries.drain(..start);
                    entries
                }
                None => logger.read_recent(limit)?,
            };

            println!("{}", format_journal_entries(&entries, format)?);
        }
        JournalCommands::Sessions { format } => {
            let entries = logger.read_all()?;
            let summaries = summarize_sessions(&entries);
            println!("{}", format_session_summaries(&summaries, format)?);
        }
    }

    Ok(())
}

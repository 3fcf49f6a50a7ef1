//! Journal display formatting
//!
//! Renders journal entries and per-session summaries as tables (tabled) or
//! as JSON / YAML for scripting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::KioskResult;
use crate::journal::{JournalEntry, JournalEvent};
use crate::models::{RegistrationRef, SessionId};

/// Output format for journal commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "Session")]
    session: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Details")]
    details: String,
}

impl From<&JournalEntry> for EntryRow {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            time: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            session: entry.session.to_string(),
            kind: entry.event.kind(),
            details: entry.event.to_string(),
        }
    }
}

/// One row per session found in the journal
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SessionSummary {
    #[tabled(rename = "Session")]
    pub session: SessionId,
    #[tabled(rename = "Started (UTC)", display_with = "display_time")]
    pub started: DateTime<Utc>,
    #[tabled(rename = "Events")]
    pub events: usize,
    #[tabled(rename = "Registration", display_with = "display_reference")]
    pub registration: Option<RegistrationRef>,
}

fn display_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn display_reference(reference: &Option<RegistrationRef>) -> String {
    reference
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Group entries by session, in order of first appearance
pub fn summarize_sessions(entries: &[JournalEntry]) -> Vec<SessionSummary> {
    let mut summaries: Vec<SessionSummary> = Vec::new();

    for entry in entries {
        let index = match summaries.iter().position(|s| s.session == entry.session) {
            Some(index) => index,
            None => {
                summaries.push(SessionSummary {
                    session: entry.session,
                    started: entry.timestamp,
                    events: 0,
                    registration: None,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        summary.events += 1;
        if let JournalEvent::RegistrationCompleted { reference, .. } = &entry.event {
            summary.registration = Some(*reference);
        }
    }

    summaries
}

/// Render journal entries in the requested format
pub fn format_journal_entries(entries: &[JournalEntry], format: OutputFormat) -> KioskResult<String> {
    match format {
        OutputFormat::Table => {
            if entries.is_empty() {
                return Ok("No journal entries found.".to_string());
            }
            let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
            Ok(Table::new(rows).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(entries)?),
    }
}

/// Render session summaries in the requested format
pub fn format_session_summaries(
    summaries: &[SessionSummary],
    format: OutputFormat,
) -> KioskResult<String> {
    match format {
        OutputFormat::Table => {
            if summaries.is_empty() {
                return Ok("No sessions recorded.".to_string());
            }
            Ok(Table::new(summaries).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(summaries)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screen;

    fn sample() -> Vec<JournalEntry> {
        let first = SessionId::new();
        let second = SessionId::new();
        vec![
            JournalEntry::new(first, JournalEvent::SessionStarted),
            JournalEntry::new(first, JournalEvent::CardDetected),
            JournalEntry::new(
                first,
                JournalEvent::RegistrationCompleted {
                    reference: RegistrationRef::new(),
                    religion: None,
                    beneficiaries: 2,
                    documents: 0,
                    executor: None,
                },
            ),
            JournalEntry::new(second, JournalEvent::SessionStarted),
            JournalEntry::new(
                second,
                JournalEvent::ScreenEntered {
                    screen: Screen::Welcome,
                },
            ),
        ]
    }

    #[test]
    fn test_summarize_sessions() {
        let entries = sample();
        let summaries = summarize_sessions(&entries);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].session, entries[0].session);
        assert_eq!(summaries[0].events, 3);
        assert!(summaries[0].registration.is_some());
        assert_eq!(summaries[1].events, 2);
        assert!(summaries[1].registration.is_none());
    }

    #[test]
    fn test_table_output() {
        let output = format_journal_entries(&sample(), OutputFormat::Table).unwrap();
        assert!(output.contains("Kind"));
        assert!(output.contains("card_detected"));
        assert!(output.contains("MyKad detected"));
    }

    #[test]
    fn test_empty_table_output() {
        let output = format_journal_entries(&[], OutputFormat::Table).unwrap();
        assert_eq!(output, "No journal entries found.");
        let output = format_session_summaries(&[], OutputFormat::Table).unwrap();
        assert_eq!(output, "No sessions recorded.");
    }

    #[test]
    fn test_json_output_parses_back() {
        let entries = sample();
        let output = format_journal_entries(&entries, OutputFormat::Json).unwrap();
        let parsed: Vec<JournalEntry> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), entries.len());
    }

    #[test]
    fn test_yaml_session_output() {
        let summaries = summarize_sessions(&sample());
        let output = format_session_summaries(&summaries, OutputFormat::Yaml).unwrap();
        assert!(output.contains("events: 3"));
    }
}

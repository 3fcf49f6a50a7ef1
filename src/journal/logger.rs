//! Journal logger for the append-only session journal
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{KioskError, KioskResult};

use super::entry::JournalEntry;

/// Handles writing journal entries to the journal file
///
/// The file uses a line-delimited JSON format (JSONL) where each line is a
/// complete JSON object representing one entry.
#[derive(Debug, Clone)]
pub struct JournalLogger {
    /// Path to the journal file
    log_path: PathBuf,
}

impl JournalLogger {
    /// Create a new JournalLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn open_for_append(&self) -> KioskResult<File> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KioskError::Journal(format!("Failed to create journal directory: {}", e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| KioskError::Journal(format!("Failed to open journal: {}", e)))
    }

    /// Append one entry
    pub fn log(&self, entry: &JournalEntry) -> KioskResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Log multiple entries, flushing once at the end
    pub fn log_batch(&self, entries: &[JournalEntry]) -> KioskResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                KioskError::Json(format!("Failed to serialize journal entry: {}", e))
            })?;

            writeln!(file, "{}", json)
                .map_err(|e| KioskError::Journal(format!("Failed to write journal entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| KioskError::Journal(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> KioskResult<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| KioskError::Journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                KioskError::Journal(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                KioskError::Json(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> KioskResult<Vec<JournalEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Read every entry of sessions matching `session` (full or short id)
    pub fn read_session(&self, session: &str) -> KioskResult<Vec<JournalEntry>> {
        let entries: Vec<JournalEntry> = self
            .read_all()?
            .into_iter()
            .filter(|e| e.session.matches(session))
            .collect();

        if entries.is_empty() {
            return Err(KioskError::session_not_found(session));
        }

        Ok(entries)
    }

    /// Number of entries in the journal
    pub fn entry_count(&self) -> KioskResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| KioskError::Journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .filter_map(|l| l.ok())
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    /// Check if the journal file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalEvent;
    use crate::models::{Screen, SessionId};
    use tempfile::TempDir;

    fn stamp(session: SessionId, events: Vec<JournalEvent>) -> Vec<JournalEntry> {
        events
            .into_iter()
            .map(|event| JournalEntry::new(session, event))
            .collect()
    }

    fn create_test_logger() -> (JournalLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("journal.log");
        let logger = JournalLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = JournalEntry::new(SessionId::new(), JournalEvent::CardDetected);

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, JournalEvent::CardDetected);
    }

    #[test]
    fn test_log_batch() {
        let (logger, _temp) = create_test_logger();
        let session = SessionId::new();

        logger
            .log_batch(&stamp(
                session,
                vec![
                    JournalEvent::SessionStarted,
                    JournalEvent::ScreenEntered {
                        screen: Screen::Welcome,
                    },
                    JournalEvent::CardDetected,
                ],
            ))
            .unwrap();

        assert_eq!(logger.entry_count().unwrap(), 3);
        assert!(logger.read_all().unwrap().iter().all(|e| e.session == session));
    }

    #[test]
    fn test_empty_batch_creates_nothing() {
        let (logger, _temp) = create_test_logger();
        logger.log_batch(&[]).unwrap();
        assert!(!logger.exists());
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        let session = SessionId::new();

        for index in 0..10 {
            logger
                .log(&JournalEntry::new(
                    session,
                    JournalEvent::BeneficiaryAdded { index },
                ))
                .unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].event, JournalEvent::BeneficiaryAdded { index: 7 });
        assert_eq!(recent[2].event, JournalEvent::BeneficiaryAdded { index: 9 });
    }

    #[test]
    fn test_read_session_filters() {
        let (logger, _temp) = create_test_logger();
        let first = SessionId::new();
        let second = SessionId::new();

        logger
            .log_batch(&stamp(first, vec![JournalEvent::SessionStarted]))
            .unwrap();
        logger
            .log_batch(&stamp(
                second,
                vec![JournalEvent::SessionStarted, JournalEvent::CardDetected],
            ))
            .unwrap();

        let entries = logger.read_session(&second.to_string()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(logger.read_session("ses-zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JournalLogger::new(temp_dir.path().join("nested").join("journal.log"));
        logger
            .log(&JournalEntry::new(SessionId::new(), JournalEvent::SessionReset))
            .unwrap();
        assert!(logger.exists());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();

        logger
            .log(&JournalEntry::new(SessionId::new(), JournalEvent::BiometricVerified))
            .unwrap();

        let logger2 = JournalLogger::new(temp.path().join("journal.log"));

        let entries = logger2.read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use wasiat_kiosk::journal::{JournalEntry, JournalEvent, JournalLogger};
use wasiat_kiosk::models::{RegistrationRef, SessionId};

fn kiosk(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kiosk").unwrap();
    cmd.env("KIOSK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn init_writes_settings_once() {
    let dir = TempDir::new().unwrap();

    kiosk(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized kiosk at"));
    assert!(dir.path().join("config.json").exists());

    kiosk(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kiosk already initialized at"));
}

#[test]
fn config_masks_ic_number() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("AHMAD BIN ABDULLAH"))
        .stdout(predicate::str::contains("******-**-1234"))
        .stdout(predicate::str::contains("901212").not());
}

#[test]
fn config_rejects_corrupt_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
    kiosk(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn empty_journal_reports_nothing() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries found."));
    kiosk(&dir)
        .args(["journal", "sessions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded."));
}

#[test]
fn journal_lists_recorded_sessions() {
    let dir = TempDir::new().unwrap();
    let logger = JournalLogger::new(dir.path().join("journal.log"));

    let session = SessionId::new();
    let reference = RegistrationRef::new();
    logger
        .log_batch(&[
            JournalEntry::new(session, JournalEvent::SessionStarted),
            JournalEntry::new(session, JournalEvent::CardDetected),
            JournalEntry::new(
                session,
                JournalEvent::RegistrationCompleted {
                    reference,
                    religion: None,
                    beneficiaries: 2,
                    documents: 0,
                    executor: None,
                },
            ),
        ])
        .unwrap();

    kiosk(&dir)
        .args(["journal", "sessions"])
        .assert()
        .success()
        .stdout(predicate::str::contains(session.to_string()))
        .stdout(predicate::str::contains(reference.to_string()));

    kiosk(&dir)
        .args(["journal", "list", "--limit", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registration_completed"))
        .stdout(predicate::str::contains("card_detected").not());

    kiosk(&dir)
        .args(["journal", "list", "--session", &session.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("MyKad detected"));
}

#[test]
fn unknown_session_fails() {
    let dir = TempDir::new().unwrap();
    kiosk(&dir)
        .args(["journal", "list", "--session", "ses-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found"));
}

use tempfile::TempDir;

use wasiat_kiosk::journal::{JournalEvent, JournalLogger};
use wasiat_kiosk::models::{
    DocumentKind, ExecutorChoice, KioskService, Percent, Religion, Screen, WitnessSlot,
};
use wasiat_kiosk::services::Wizard;
use wasiat_kiosk::KioskError;

fn flush(wizard: &mut Wizard, logger: &JournalLogger) {
    logger.log_batch(&wizard.drain_events()).unwrap();
}

fn walk_to_assets(wizard: &mut Wizard, religion: Religion) {
    wizard.select_service(KioskService::DigitalWill).unwrap();
    wizard.detect_card().unwrap();
    wizard.advance().unwrap();
    wizard.scan_fingerprint().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.select_religion(religion).unwrap(), Screen::Assets);
}

#[test]
fn muslim_registration_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let logger = JournalLogger::new(temp_dir.path().join("journal.log"));
    let mut wizard = Wizard::new();

    walk_to_assets(&mut wizard, Religion::Muslim);
    assert_eq!(wizard.allocation().cap(), Percent::WASIAT);
    assert!(wizard.allocation().is_balanced());

    // Free some headroom, add a third beneficiary and hand it the rest
    wizard.decrease_share(0).unwrap();
    wizard.decrease_share(0).unwrap();
    let index = wizard.add_beneficiary().unwrap();
    assert_eq!(wizard.allocation().get(index).unwrap().share, Percent::zero());
    wizard.rename_beneficiary(index, "  Sister  ").unwrap();
    assert!(matches!(wizard.advance(), Err(KioskError::Blocked(_))));

    let stored = wizard.set_share_from_input(index, "90").unwrap();
    assert_eq!(stored, Percent::from_whole(2));
    assert!(wizard.allocation().is_balanced());
    assert_eq!(wizard.allocation().get(index).unwrap().name, "Sister");

    assert_eq!(wizard.advance().unwrap(), Screen::Documents);
    wizard.upload_document(DocumentKind::LandTitle).unwrap();
    assert_eq!(wizard.advance().unwrap(), Screen::Executor);
    assert!(wizard.advance().is_err());
    wizard.select_executor(ExecutorChoice::AmanahRaya).unwrap();
    assert_eq!(wizard.advance().unwrap(), Screen::Witnesses);

    for slot in WitnessSlot::ALL {
        wizard.insert_witness_card(slot).unwrap();
        wizard.scan_witness_fingerprint(slot).unwrap();
    }
    assert_eq!(wizard.advance().unwrap(), Screen::Success);
    let reference = wizard.registration().unwrap();
    flush(&mut wizard, &logger);

    let entries = logger.read_all().unwrap();
    assert!(entries.iter().all(|e| e.session == wizard.session()));
    let completed = entries
        .iter()
        .find_map(|e| match &e.event {
            JournalEvent::RegistrationCompleted {
                reference,
                religion,
                beneficiaries,
                documents,
                executor,
            } => Some((*reference, *religion, *beneficiaries, *documents, *executor)),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        completed,
        (
            reference,
            Some(Religion::Muslim),
            3,
            1,
            Some(ExecutorChoice::AmanahRaya)
        )
    );
}

#[test]
fn witness_fingerprint_requires_ic_first() {
    let mut wizard = Wizard::new();
    walk_to_assets(&mut wizard, Religion::NonMuslim);
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.select_executor(ExecutorChoice::SmartContract).unwrap();
    wizard.advance().unwrap();

    let err = wizard
        .scan_witness_fingerprint(WitnessSlot::Second)
        .unwrap_err();
    assert!(err.is_rejection());
    assert!(!wizard.witness(WitnessSlot::Second).verified);
}

#[test]
fn restart_starts_a_fresh_session() {
    let temp_dir = TempDir::new().unwrap();
    let logger = JournalLogger::new(temp_dir.path().join("journal.log"));
    let mut wizard = Wizard::new();

    walk_to_assets(&mut wizard, Religion::NonMuslim);
    wizard.remove_beneficiary(1).unwrap();
    wizard.set_share_from_input(0, "100").unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.select_executor(ExecutorChoice::PrivateIndividual).unwrap();
    wizard.advance().unwrap();
    for slot in WitnessSlot::ALL {
        wizard.insert_witness_card(slot).unwrap();
        wizard.scan_witness_fingerprint(slot).unwrap();
    }
    wizard.advance().unwrap();

    let first_session = wizard.session();
    assert_eq!(wizard.advance().unwrap(), Screen::Welcome);
    flush(&mut wizard, &logger);

    assert_ne!(wizard.session(), first_session);
    assert!(!wizard.card_detected());
    assert!(wizard.religion().is_none());
    assert!(wizard.executor().is_none());
    assert!(wizard.registration().is_none());
    assert_eq!(wizard.allocation().len(), 2);
    for slot in WitnessSlot::ALL {
        assert!(!wizard.witness(slot).card_inserted);
    }

    let entries = logger.read_all().unwrap();
    let reset = entries
        .iter()
        .position(|e| e.event == JournalEvent::SessionReset)
        .unwrap();
    assert_eq!(entries[reset].session, first_session);
    assert!(entries[reset + 1..]
        .iter()
        .all(|e| e.session == wizard.session()));

    // A reopened logger sees the same history
    let reopened = JournalLogger::new(temp_dir.path().join("journal.log"));
    assert_eq!(reopened.entry_count().unwrap(), entries.len());
    assert_eq!(
        reopened
            .read_session(&wizard.session().to_string())
            .unwrap()
            .len(),
        entries.len() - reset - 1
    );
}

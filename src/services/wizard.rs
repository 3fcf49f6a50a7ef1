//! Wizard flow controller
//!
//! Holds the whole state of one kiosk session and decides which transitions
//! are allowed. Every state change is buffered as a journal entry that the
//! caller drains and persists; the controller itself performs no I/O.

use crate::error::{KioskError, KioskResult};
use crate::journal::{JournalEntry, JournalEvent};
use crate::models::{
    Beneficiary, DocumentKind, ExecutorChoice, KioskService, Percent, RegistrationRef, Religion,
    Screen, SessionId, UploadedDocuments, WitnessCheck, WitnessSlot,
};

use super::allocation::Allocation;

/// State of one Digital Will registration session
#[derive(Debug, Clone)]
pub struct Wizard {
    session: SessionId,
    screen: Screen,
    card_detected: bool,
    biometric_verified: bool,
    religion: Option<Religion>,
    allocation: Allocation,
    documents: UploadedDocuments,
    executor: Option<ExecutorChoice>,
    witnesses: [WitnessCheck; 2],
    registration: Option<RegistrationRef>,
    pending: Vec<JournalEntry>,
}

impl Wizard {
    /// Start a fresh session on the main menu
    pub fn new() -> Self {
        let mut wizard = Self {
            session: SessionId::new(),
            screen: Screen::Menu,
            card_detected: false,
            biometric_verified: false,
            religion: None,
            allocation: Allocation::seeded(),
            documents: UploadedDocuments::new(),
            executor: None,
            witnesses: [WitnessCheck::default(); 2],
            registration: None,
            pending: Vec::new(),
        };
        wizard.record(JournalEvent::SessionStarted);
        wizard
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn card_detected(&self) -> bool {
        self.card_detected
    }

    pub fn biometric_verified(&self) -> bool {
        self.biometric_verified
    }

    pub fn religion(&self) -> Option<Religion> {
        self.religion
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn documents(&self) -> &UploadedDocuments {
        &self.documents
    }

    pub fn executor(&self) -> Option<ExecutorChoice> {
        self.executor
    }

    pub fn witness(&self, slot: WitnessSlot) -> &WitnessCheck {
        &self.witnesses[slot.index()]
    }

    /// Reference issued when registration completed
    pub fn registration(&self) -> Option<RegistrationRef> {
        self.registration
    }

    /// Whether the citizen has started entering anything since the menu
    pub fn in_progress(&self) -> bool {
        !matches!(self.screen, Screen::Menu | Screen::Success)
    }

    /// Take the journal entries produced since the last call
    pub fn drain_events(&mut self) -> Vec<JournalEntry> {
        std::mem::take(&mut self.pending)
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Why the forward control of the current screen is disabled, if it is
    pub fn blocked_reason(&self) -> Option<String> {
        match self.screen {
            Screen::Menu | Screen::Documents | Screen::Success => None,
            Screen::Welcome if !self.card_detected => {
                Some("Please insert your MyKad into the card reader".into())
            }
            Screen::Biometric if !self.biometric_verified => {
                Some("Please place your right thumb on the scanner".into())
            }
            Screen::Religion if self.religion.is_none() => {
                Some("Please select your religion".into())
            }
            Screen::Assets if !self.allocation.is_balanced() => Some(format!(
                "Allocation must total {} before continuing (currently {})",
                self.allocation.cap(),
                self.allocation.total()
            )),
            Screen::Executor if self.executor.is_none() => {
                Some("Please choose a digital executor".into())
            }
            Screen::Witnesses if !self.witnesses.iter().all(|w| w.verified) => {
                Some("Both witnesses must be verified".into())
            }
            _ => None,
        }
    }

    /// Whether the forward control of the current screen is enabled
    pub fn can_advance(&self) -> bool {
        self.blocked_reason().is_none()
    }

    /// Move forward one screen if the current screen's gate is open
    ///
    /// Advancing from the witnesses screen completes the registration.
    /// Advancing from the success screen restarts the kiosk.
    pub fn advance(&mut self) -> KioskResult<Screen> {
        if let Some(reason) = self.blocked_reason() {
            return Err(KioskError::Blocked(reason));
        }

        match self.screen {
            Screen::Success => {
                self.restart()?;
            }
            Screen::Witnesses => {
                self.complete_registration();
                self.enter(Screen::Success);
            }
            current => {
                if let Some(next) = current.next() {
                    self.enter(next);
                }
            }
        }

        Ok(self.screen)
    }

    /// Walk back one screen
    pub fn back(&mut self) -> KioskResult<Screen> {
        match self.screen {
            Screen::Menu => Err(KioskError::Blocked("Already at the main menu".into())),
            Screen::Success => Err(KioskError::Blocked(
                "Registration is complete; press Finish to start over".into(),
            )),
            current => {
                if let Some(previous) = current.previous() {
                    self.enter(previous);
                }
                Ok(self.screen)
            }
        }
    }

    fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        // The card and thumb must be presented again whenever the screen is shown
        match screen {
            Screen::Welcome => self.card_detected = false,
            Screen::Biometric => self.biometric_verified = false,
            _ => {}
        }
        self.record(JournalEvent::ScreenEntered { screen });
    }

    fn require_screen(&self, expected: Screen) -> KioskResult<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(KioskError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }

    fn record(&mut self, event: JournalEvent) {
        self.pending.push(JournalEntry::new(self.session, event));
    }

    // ---------------------------------------------------------------------
    // Menu, card and biometric
    // ---------------------------------------------------------------------

    /// Pick a service tile on the main menu
    pub fn select_service(&mut self, service: KioskService) -> KioskResult<Screen> {
        self.require_screen(Screen::Menu)?;
        if !service.is_available() {
            return Err(KioskError::Unavailable(format!(
                "{} is coming soon",
                service.title()
            )));
        }
        self.advance()
    }

    /// Simulate the card reader detecting the citizen's MyKad
    pub fn detect_card(&mut self) -> KioskResult<()> {
        self.require_screen(Screen::Welcome)?;
        if !self.card_detected {
            self.card_detected = true;
            self.record(JournalEvent::CardDetected);
        }
        Ok(())
    }

    /// Simulate the fingerprint scanner matching the citizen's thumb
    pub fn scan_fingerprint(&mut self) -> KioskResult<()> {
        self.require_screen(Screen::Biometric)?;
        if !self.biometric_verified {
            self.biometric_verified = true;
            self.record(JournalEvent::BiometricVerified);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Religion and allocation
    // ---------------------------------------------------------------------

    /// Choose a religion profile and continue to the allocation screen
    ///
    /// A change of cap rescales the existing shares onto the new cap.
    pub fn select_religion(&mut self, religion: Religion) -> KioskResult<Screen> {
        self.require_screen(Screen::Religion)?;
        self.religion = Some(religion);
        self.allocation.rescale(religion.cap());
        self.record(JournalEvent::ReligionSelected {
            religion,
            cap: religion.cap(),
        });
        self.advance()
    }

    fn record_share(&mut self, index: usize, share: Percent) {
        let total = self.allocation.total();
        self.record(JournalEvent::ShareChanged {
            index,
            share,
            total,
        });
    }

    /// "+" stepper on a beneficiary
    pub fn increase_share(&mut self, index: usize) -> KioskResult<Percent> {
        self.require_screen(Screen::Assets)?;
        let share = self.allocation.increase(index)?;
        self.record_share(index, share);
        Ok(share)
    }

    /// "-" stepper on a beneficiary
    pub fn decrease_share(&mut self, index: usize) -> KioskResult<Percent> {
        self.require_screen(Screen::Assets)?;
        let share = self.allocation.decrease(index)?;
        self.record_share(index, share);
        Ok(share)
    }

    /// Typed percentage for a beneficiary; clamped, never rejected
    pub fn set_share_from_input(&mut self, index: usize, input: &str) -> KioskResult<Percent> {
        self.require_screen(Screen::Assets)?;
        let share = self.allocation.set_share_from_input(index, input)?;
        self.record_share(index, share);
        Ok(share)
    }

    /// Append a blank beneficiary at 0%
    pub fn add_beneficiary(&mut self) -> KioskResult<usize> {
        self.require_screen(Screen::Assets)?;
        let index = self.allocation.add()?;
        self.record(JournalEvent::BeneficiaryAdded { index });
        Ok(index)
    }

    /// Remove a beneficiary (never the last one)
    pub fn remove_beneficiary(&mut self, index: usize) -> KioskResult<Beneficiary> {
        self.require_screen(Screen::Assets)?;
        let removed = self.allocation.remove(index)?;
        self.record(JournalEvent::BeneficiaryRemoved {
            name: removed.name.clone(),
            share: removed.share,
        });
        Ok(removed)
    }

    /// Change a beneficiary's name
    pub fn rename_beneficiary(&mut self, index: usize, name: &str) -> KioskResult<()> {
        self.require_screen(Screen::Assets)?;
        let name = name.trim();
        self.allocation.rename(index, name)?;
        self.record(JournalEvent::BeneficiaryRenamed {
            index,
            name: name.to_string(),
        });
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Documents and executor
    // ---------------------------------------------------------------------

    /// Present a supporting document (stub upload)
    pub fn upload_document(&mut self, document: DocumentKind) -> KioskResult<()> {
        self.require_screen(Screen::Documents)?;
        if self.documents.mark(document) {
            self.record(JournalEvent::DocumentUploaded { document });
        }
        Ok(())
    }

    /// Choose who executes the will
    pub fn select_executor(&mut self, executor: ExecutorChoice) -> KioskResult<()> {
        self.require_screen(Screen::Executor)?;
        if self.executor != Some(executor) {
            self.executor = Some(executor);
            self.record(JournalEvent::ExecutorSelected { executor });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Witnesses
    // ---------------------------------------------------------------------

    /// Step 1 for a witness: insert IC
    pub fn insert_witness_card(&mut self, witness: WitnessSlot) -> KioskResult<()> {
        self.require_screen(Screen::Witnesses)?;
        if self.witnesses[witness.index()].insert_card() {
            self.record(JournalEvent::WitnessCardInserted { witness });
        }
        Ok(())
    }

    /// Step 2 for a witness: scan fingerprint (requires step 1)
    pub fn scan_witness_fingerprint(&mut self, witness: WitnessSlot) -> KioskResult<()> {
        self.require_screen(Screen::Witnesses)?;
        if self.witnesses[witness.index()].scan_fingerprint()? {
            self.record(JournalEvent::WitnessVerified { witness });
        }
        Ok(())
    }

    fn complete_registration(&mut self) {
        let reference = RegistrationRef::new();
        self.registration = Some(reference);
        self.record(JournalEvent::RegistrationCompleted {
            reference,
            religion: self.religion,
            beneficiaries: self.allocation.len(),
            documents: self.documents.len(),
            executor: self.executor,
        });
    }

    // ---------------------------------------------------------------------
    // Restart
    // ---------------------------------------------------------------------

    /// "Finish / Return to Home": clear everything for the next citizen
    ///
    /// The kiosk lands back on the card-insertion screen under a new session.
    pub fn restart(&mut self) -> KioskResult<()> {
        self.require_screen(Screen::Success)?;
        self.record(JournalEvent::SessionReset);

        let pending = std::mem::take(&mut self.pending);
        *self = Self::new();
        let started = std::mem::take(&mut self.pending);
        self.pending = pending;
        self.pending.extend(started);

        self.enter(Screen::Welcome);
        Ok(())
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_at(screen: Screen) -> Wizard {
        let mut wizard = Wizard::new();
        while wizard.screen() != screen {
            match wizard.screen() {
                Screen::Menu => {
                    wizard.select_service(KioskService::DigitalWill).unwrap();
                }
                Screen::Welcome => {
                    wizard.detect_card().unwrap();
                    wizard.advance().unwrap();
                }
                Screen::Biometric => {
                    wizard.scan_fingerprint().unwrap();
                    wizard.advance().unwrap();
                }
                Screen::Religion => {
                    wizard.select_religion(Religion::NonMuslim).unwrap();
                }
                Screen::Executor => {
                    wizard.select_executor(ExecutorChoice::AmanahRaya).unwrap();
                    wizard.advance().unwrap();
                }
                Screen::Witnesses => {
                    for slot in WitnessSlot::ALL {
                        wizard.insert_witness_card(slot).unwrap();
                        wizard.scan_witness_fingerprint(slot).unwrap();
                    }
                    wizard.advance().unwrap();
                }
                _ => {
                    wizard.advance().unwrap();
                }
            }
        }
        wizard
    }

    #[test]
    fn test_starts_on_menu_with_defaults() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.screen(), Screen::Menu);
        assert!(wizard.religion().is_none());
        assert_eq!(wizard.allocation().len(), 2);
        assert!(!wizard.in_progress());
        assert_eq!(
            wizard.drain_events().last().map(|e| e.event.clone()),
            Some(JournalEvent::SessionStarted)
        );
    }

    #[test]
    fn test_unavailable_service_rejected() {
        let mut wizard = Wizard::new();
        let err = wizard
            .select_service(KioskService::MyKadReplacement)
            .unwrap_err();
        assert!(matches!(err, KioskError::Unavailable(_)));
        assert_eq!(wizard.screen(), Screen::Menu);
    }

    #[test]
    fn test_welcome_requires_card() {
        let mut wizard = wizard_at(Screen::Welcome);
        assert!(!wizard.can_advance());
        assert!(wizard.advance().unwrap_err().is_rejection());
        wizard.detect_card().unwrap();
        assert_eq!(wizard.advance().unwrap(), Screen::Biometric);
    }

    #[test]
    fn test_biometric_requires_scan() {
        let mut wizard = wizard_at(Screen::Biometric);
        assert!(wizard.advance().is_err());
        wizard.scan_fingerprint().unwrap();
        assert_eq!(wizard.advance().unwrap(), Screen::Religion);
    }

    #[test]
    fn test_walking_back_clears_device_flags() {
        let mut wizard = wizard_at(Screen::Religion);
        assert_eq!(wizard.back().unwrap(), Screen::Biometric);
        assert!(!wizard.biometric_verified());
        assert_eq!(wizard.back().unwrap(), Screen::Welcome);
        assert!(!wizard.card_detected());
        assert_eq!(wizard.back().unwrap(), Screen::Menu);
        assert!(wizard.back().is_err());
    }

    #[test]
    fn test_religion_selection_sets_cap_and_advances() {
        let mut wizard = wizard_at(Screen::Religion);
        assert_eq!(wizard.select_religion(Religion::Muslim).unwrap(), Screen::Assets);
        assert_eq!(wizard.allocation().cap(), Percent::WASIAT);
        assert!(wizard.allocation().total() <= Percent::WASIAT);
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_changing_religion_rescales() {
        let mut wizard = wizard_at(Screen::Religion);
        wizard.select_religion(Religion::Muslim).unwrap();
        wizard.back().unwrap();
        wizard.select_religion(Religion::NonMuslim).unwrap();
        assert_eq!(wizard.allocation().cap(), Percent::FULL);
        assert!(wizard.allocation().is_balanced());
    }

    #[test]
    fn test_assets_gate_requires_balance() {
        let mut wizard = wizard_at(Screen::Assets);
        wizard.decrease_share(0).unwrap();
        assert!(!wizard.can_advance());
        assert!(wizard.blocked_reason().unwrap().contains("100.0%"));
        assert!(wizard.advance().is_err());

        wizard.add_beneficiary().unwrap();
        wizard.set_share_from_input(2, "1").unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance().unwrap(), Screen::Documents);
    }

    #[test]
    fn test_allocation_actions_are_screen_scoped() {
        let mut wizard = wizard_at(Screen::Documents);
        let err = wizard.increase_share(0).unwrap_err();
        assert!(matches!(
            err,
            KioskError::WrongScreen {
                expected: Screen::Assets,
                actual: Screen::Documents
            }
        ));
    }

    #[test]
    fn test_documents_are_optional() {
        let mut wizard = wizard_at(Screen::Documents);
        assert!(wizard.can_advance());
        wizard.upload_document(DocumentKind::BankStatement).unwrap();
        wizard.upload_document(DocumentKind::BankStatement).unwrap();
        assert_eq!(wizard.documents().len(), 1);
        assert_eq!(wizard.advance().unwrap(), Screen::Executor);
    }

    #[test]
    fn test_executor_required() {
        let mut wizard = wizard_at(Screen::Executor);
        assert!(wizard.advance().is_err());
        wizard.select_executor(ExecutorChoice::SmartContract).unwrap();
        assert_eq!(wizard.advance().unwrap(), Screen::Witnesses);
    }

    #[test]
    fn test_witness_fingerprint_needs_card() {
        let mut wizard = wizard_at(Screen::Witnesses);
        assert!(wizard
            .scan_witness_fingerprint(WitnessSlot::First)
            .unwrap_err()
            .is_rejection());
        assert!(!wizard.witness(WitnessSlot::First).verified);

        wizard.insert_witness_card(WitnessSlot::First).unwrap();
        wizard.scan_witness_fingerprint(WitnessSlot::First).unwrap();
        assert!(wizard.witness(WitnessSlot::First).verified);
        assert!(wizard.advance().is_err());

        wizard.insert_witness_card(WitnessSlot::Second).unwrap();
        wizard.scan_witness_fingerprint(WitnessSlot::Second).unwrap();
        assert_eq!(wizard.advance().unwrap(), Screen::Success);
        assert!(wizard.registration().is_some());
    }

    #[test]
    fn test_success_has_no_back() {
        let mut wizard = wizard_at(Screen::Success);
        assert!(wizard.back().is_err());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut wizard = wizard_at(Screen::Success);
        let old_session = wizard.session();
        wizard.drain_events();

        wizard.advance().unwrap();

        assert_eq!(wizard.screen(), Screen::Welcome);
        assert_ne!(wizard.session(), old_session);
        assert!(!wizard.card_detected());
        assert!(!wizard.biometric_verified());
        assert!(wizard.religion().is_none());
        assert_eq!(wizard.allocation(), &Allocation::seeded());
        assert!(wizard.documents().is_empty());
        assert!(wizard.executor().is_none());
        for slot in WitnessSlot::ALL {
            assert_eq!(wizard.witness(slot), &WitnessCheck::default());
        }
        assert!(wizard.registration().is_none());

        let events = wizard.drain_events();
        assert_eq!(events[0].event, JournalEvent::SessionReset);
        assert_eq!(events[0].session, old_session);
        assert_eq!(events[1].event, JournalEvent::SessionStarted);
        assert_eq!(events[1].session, wizard.session());
    }

    #[test]
    fn test_restart_only_from_success() {
        let mut wizard = wizard_at(Screen::Assets);
        assert!(wizard.restart().is_err());
    }

    #[test]
    fn test_events_are_buffered_until_drained() {
        let mut wizard = wizard_at(Screen::Welcome);
        wizard.drain_events();
        wizard.detect_card().unwrap();
        wizard.detect_card().unwrap();
        let events = wizard.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, JournalEvent::CardDetected);
        assert!(wizard.drain_events().is_empty());
    }
}

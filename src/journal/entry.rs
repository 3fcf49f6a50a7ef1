//! Journal entry data structures
//!
//! Defines the events a kiosk session can produce and the timestamped entry
//! format written to the journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{
    DocumentKind, ExecutorChoice, Percent, RegistrationRef, Religion, Screen, SessionId,
    WitnessSlot,
};

/// Something that happened during a kiosk session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JournalEvent {
    /// A new session began (process start or restart)
    SessionStarted,
    /// The wizard moved to a screen
    ScreenEntered { screen: Screen },
    /// The citizen's MyKad was detected
    CardDetected,
    /// The citizen's fingerprint was matched
    BiometricVerified,
    /// A religion profile was chosen
    ReligionSelected { religion: Religion, cap: Percent },
    /// A beneficiary was appended
    BeneficiaryAdded { index: usize },
    /// A beneficiary was removed
    BeneficiaryRemoved { name: String, share: Percent },
    /// A beneficiary was renamed
    BeneficiaryRenamed { index: usize, name: String },
    /// A share was changed (after clamping)
    ShareChanged { index: usize, share: Percent, total: Percent },
    /// A supporting document was presented
    DocumentUploaded { document: DocumentKind },
    /// An executor was chosen
    ExecutorSelected { executor: ExecutorChoice },
    /// A witness inserted their IC
    WitnessCardInserted { witness: WitnessSlot },
    /// A witness's fingerprint was matched
    WitnessVerified { witness: WitnessSlot },
    /// The will was registered
    RegistrationCompleted {
        reference: RegistrationRef,
        religion: Option<Religion>,
        beneficiaries: usize,
        documents: usize,
        executor: Option<ExecutorChoice>,
    },
    /// All state was cleared for the next citizen
    SessionReset,
}

impl JournalEvent {
    /// Short machine-friendly name of the event
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionStarted => "session_started",
            Self::ScreenEntered { .. } => "screen_entered",
            Self::CardDetected => "card_detected",
            Self::BiometricVerified => "biometric_verified",
            Self::ReligionSelected { .. } => "religion_selected",
            Self::BeneficiaryAdded { .. } => "beneficiary_added",
            Self::BeneficiaryRemoved { .. } => "beneficiary_removed",
            Self::BeneficiaryRenamed { .. } => "beneficiary_renamed",
            Self::ShareChanged { .. } => "share_changed",
            Self::DocumentUploaded { .. } => "document_uploaded",
            Self::ExecutorSelected { .. } => "executor_selected",
            Self::WitnessCardInserted { .. } => "witness_card_inserted",
            Self::WitnessVerified { .. } => "witness_verified",
            Self::RegistrationCompleted { .. } => "registration_completed",
            Self::SessionReset => "session_reset",
        }
    }
}

impl fmt::Display for JournalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionStarted => write!(f, "Session started"),
            Self::ScreenEntered { screen } => write!(f, "Entered {}", screen),
            Self::CardDetected => write!(f, "MyKad detected"),
            Self::BiometricVerified => write!(f, "Identity verified"),
            Self::ReligionSelected { religion, cap } => {
                write!(f, "Religion {} (cap {})", religion, cap)
            }
            Self::BeneficiaryAdded { index } => write!(f, "Beneficiary #{} added", index + 1),
            Self::BeneficiaryRemoved { name, share } => {
                write!(f, "Beneficiary '{}' removed ({})", name, share)
            }
            Self::BeneficiaryRenamed { index, name } => {
                write!(f, "Beneficiary #{} renamed to '{}'", index + 1, name)
            }
            Self::ShareChanged {
                index,
                share,
                total,
            } => write!(f, "Beneficiary #{} set to {} (total {})", index + 1, share, total),
            Self::DocumentUploaded { document } => write!(f, "{} uploaded", document),
            Self::ExecutorSelected { executor } => write!(f, "Executor: {}", executor),
            Self::WitnessCardInserted { witness } => write!(f, "{} IC inserted", witness),
            Self::WitnessVerified { witness } => write!(f, "{} verified", witness),
            Self::RegistrationCompleted {
                reference,
                beneficiaries,
                ..
            } => write!(
                f,
                "Registered {} with {} beneficiaries",
                reference, beneficiaries
            ),
            Self::SessionReset => write!(f, "Session reset"),
        }
    }
}

/// A single journal line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Session the event belongs to
    pub session: SessionId,

    /// What happened
    pub event: JournalEvent,
}

impl JournalEntry {
    /// Stamp an event with the current time
    pub fn new(session: SessionId, event: JournalEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.session,
            self.event
        )
    }
}

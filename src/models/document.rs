//! Supporting documents
//!
//! Uploads are stubs: the kiosk only records that a document was presented.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kinds of asset evidence the kiosk accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    LandTitle,
    VehicleGrant,
    BankStatement,
}

impl DocumentKind {
    /// All document kinds in display order
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::LandTitle,
        DocumentKind::VehicleGrant,
        DocumentKind::BankStatement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LandTitle => "Land Title",
            Self::VehicleGrant => "Vehicle Grant",
            Self::BankStatement => "Bank Statement",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Set of documents uploaded during a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocuments(BTreeSet<DocumentKind>);

impl UploadedDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a document as uploaded; returns false if it already was
    pub fn mark(&mut self, kind: DocumentKind) -> bool {
        self.0.insert(kind)
    }

    pub fn contains(&self, kind: DocumentKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut docs = UploadedDocuments::new();
        assert!(docs.mark(DocumentKind::LandTitle));
        assert!(!docs.mark(DocumentKind::LandTitle));
        assert_eq!(docs.len(), 1);
        assert!(docs.contains(DocumentKind::LandTitle));
        assert!(!docs.contains(DocumentKind::BankStatement));
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic roles a sheet column can be resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticField {
    CompanyId,
    CompanyName,
    Phone1,
    Phone2,
    Email,
    Outcome,
    Note,
    /// Zero-based call timestamp slot.
    Timestamp(u8),
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticField::CompanyId => write!(f, "company id"),
            SemanticField::CompanyName => write!(f, "company name"),
            SemanticField::Phone1 => write!(f, "phone 1"),
            SemanticField::Phone2 => write!(f, "phone 2"),
            SemanticField::Email => write!(f, "email"),
            SemanticField::Outcome => write!(f, "outcome"),
            SemanticField::Note => write!(f, "note"),
            SemanticField::Timestamp(slot) => write!(f, "timestamp {}", slot + 1),
        }
    }
}

/// Header names resolved for one sheet.
///
/// Built once by the column resolver and treated as immutable afterwards.
/// Every field is optional: a sheet that lacks a column simply leaves the
/// slot empty, and downstream stages treat the field as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub email: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
    /// Resolved call timestamp headers, in slot order.
    pub timestamps: Vec<String>,
}

impl FieldMap {
    /// Header resolved for `field`, if any.
    pub fn header(&self, field: SemanticField) -> Option<&str> {
        match field {
            SemanticField::CompanyId => self.company_id.as_deref(),
            SemanticField::CompanyName => self.company_name.as_deref(),
            SemanticField::Phone1 => self.phone1.as_deref(),
            SemanticField::Phone2 => self.phone2.as_deref(),
            SemanticField::Email => self.email.as_deref(),
            SemanticField::Outcome => self.outcome.as_deref(),
            SemanticField::Note => self.note.as_deref(),
            SemanticField::Timestamp(slot) => {
                self.timestamps.get(usize::from(slot)).map(String::as_str)
            }
        }
    }

    /// True when not a single column was resolved.
    pub fn is_empty(&self) -> bool {
        self.company_id.is_none()
            && self.company_name.is_none()
            && self.phone1.is_none()
            && self.phone2.is_none()
            && self.email.is_none()
            && self.outcome.is_none()
            && self.note.is_none()
            && self.timestamps.is_empty()
    }
}

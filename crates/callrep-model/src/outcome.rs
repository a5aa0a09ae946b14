use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical call outcome categories used across the legacy report sheets.
///
/// The closed variants cover the labels the call operators actually write,
/// in all their spelling variations. Anything that matches no known label is
/// preserved verbatim in [`OutcomeCategory::Other`] so no information is
/// lost on the way to the reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeCategory {
    /// Call placed but nobody picked up ("Não atende").
    NotReached,
    /// Contact reached but turned the proposal down ("Não acatou").
    RejectedProposal,
    /// The number on file does not belong to the company ("Número incorreto").
    InvalidNumber,
    /// Company registration has been closed ("Baixada").
    CompanyClosed,
    /// Contact asked to be called back at a given time ("Retornar em horário").
    CallbackRequested,
    /// No outcome recorded for the call.
    NotInformed,
    /// Free-text outcome matching no known category, kept as written.
    Other(String),
}

impl OutcomeCategory {
    /// Display label, using the wording established in the legacy sheets.
    pub fn label(&self) -> &str {
        match self {
            OutcomeCategory::NotReached => "Não atende",
            OutcomeCategory::RejectedProposal => "Não acatou",
            OutcomeCategory::InvalidNumber => "Número incorreto",
            OutcomeCategory::CompanyClosed => "Baixada",
            OutcomeCategory::CallbackRequested => "Retornar em horário",
            OutcomeCategory::NotInformed => "Não informado",
            OutcomeCategory::Other(text) => text.as_str(),
        }
    }

    /// True for every outcome except "nobody picked up", which is the filter
    /// the follow-up views apply.
    pub fn is_notable(&self) -> bool {
        !matches!(self, OutcomeCategory::NotReached)
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

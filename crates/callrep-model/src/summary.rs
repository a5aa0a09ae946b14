use serde::{Deserialize, Serialize};

/// One outcome label with its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub label: String,
    pub count: usize,
}

/// Coverage and outcome metrics for one sheet, derived on demand from its
/// cleaned records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub sheet: String,
    pub records: usize,
    pub with_phone1: usize,
    pub with_phone2: usize,
    pub with_any_phone: usize,
    pub with_email: usize,
    pub distinct_outcomes: usize,
    /// Most frequent outcomes, largest first, capped at three.
    pub top_outcomes: Vec<OutcomeCount>,
}

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::OutcomeCategory;

/// A parsed call timestamp.
///
/// The sheets mix full datetimes with day-less `"DD/MM - HH:MM"` entries.
/// The latter keep only their hour instead of being anchored to an invented
/// calendar date, so every value here states exactly what the cell knew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "precision", content = "value")]
pub enum CallTimestamp {
    Full(NaiveDateTime),
    HourOnly(u32),
}

impl CallTimestamp {
    /// Hour of day (0-23), available at either precision.
    pub fn hour(&self) -> u32 {
        match self {
            CallTimestamp::Full(datetime) => datetime.hour(),
            CallTimestamp::HourOnly(hour) => *hour,
        }
    }

    pub fn as_full(&self) -> Option<NaiveDateTime> {
        match self {
            CallTimestamp::Full(datetime) => Some(*datetime),
            CallTimestamp::HourOnly(_) => None,
        }
    }
}

impl fmt::Display for CallTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallTimestamp::Full(datetime) => {
                write!(f, "{}", datetime.format("%d/%m/%Y %H:%M"))
            }
            CallTimestamp::HourOnly(hour) => write!(f, "{hour:02}:00"),
        }
    }
}

/// One cleaned contact row.
///
/// Built in a single pass by the record cleaner and never mutated after
/// that. Optional fields are `None` when the source cell was blank, a
/// spreadsheet placeholder, or the column did not exist at all; placeholder
/// strings never survive into these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Sheet the record came from, kept for the consolidated views.
    pub sheet: String,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub email: Option<String>,
    pub outcome: OutcomeCategory,
    /// Outcome text exactly as written, before classification.
    pub outcome_raw: Option<String>,
    pub note: Option<String>,
    /// One slot per resolved timestamp column, in column order. `None`
    /// marks a blank or unparseable cell, which is a data gap, not an error.
    pub timestamps: Vec<Option<CallTimestamp>>,
}

impl CleanRecord {
    pub fn has_any_phone(&self) -> bool {
        self.phone1.is_some() || self.phone2.is_some()
    }

    /// Parsed timestamps only, gaps skipped.
    pub fn parsed_timestamps(&self) -> impl Iterator<Item = CallTimestamp> + '_ {
        self.timestamps.iter().filter_map(|slot| *slot)
    }
}

//! Call timestamp parsing.
//!
//! The timestamp columns mix machine-written ISO datetimes with hand-typed
//! `DD/MM/YYYY` variants, two-digit years, and day-less `"DD/MM - HH:MM"`
//! entries. Parsing is total: anything unrecognized is a data gap (`None`),
//! never an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use callrep_model::{CallTimestamp, CellValue};

use crate::value::format_number;

/// Full datetime shapes, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S", // 2025-09-03 09:31:55
    "%d/%m/%Y %H:%M",    // 03/09/2025 09:31
    "%d/%m/%Y - %H:%M",  // 02/10/2025 - 15:33
];

/// Date-only shapes, parsed to midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 2025-09-03
    "%d/%m/%Y", // 03/09/2025
];

/// Two-digit years below this read as 20xx, the rest as 19xx.
const CENTURY_PIVOT: u32 = 50;

/// Parse a cell into a call timestamp.
///
/// Cells already typed as datetimes pass straight through. Numbers are
/// rendered back to text first, which in practice never yields a valid
/// shape and so reports a gap, same as the legacy flow.
pub fn parse_timestamp(cell: &CellValue) -> Option<CallTimestamp> {
    match cell {
        CellValue::DateTime(datetime) => Some(CallTimestamp::Full(*datetime)),
        CellValue::Text(text) => parse_timestamp_text(text),
        CellValue::Number(number) => parse_timestamp_text(&format_number(*number)),
        CellValue::Missing => None,
    }
}

/// Parse timestamp text into a full datetime or an hour-only value.
pub fn parse_timestamp_text(text: &str) -> Option<CallTimestamp> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Hand-typed two-digit years are widened up front so the regular
    // format list can take over. chrono's own %y pivot (69) does not match
    // the sheets' convention, so the century rule is applied textually.
    let widened = widen_two_digit_year(trimmed);
    let candidate = widened.as_deref().unwrap_or(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(candidate, format) {
            return Some(CallTimestamp::Full(datetime));
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
            return Some(CallTimestamp::Full(date.and_time(NaiveTime::MIN)));
        }
    }

    // Day-less "DD/MM - HH:MM" entries carry no usable calendar date; keep
    // the hour, which is all the hourly views need.
    extract_hour(trimmed).map(CallTimestamp::HourOnly)
}

/// Rewrite `DD/MM/YY[ time]` as `DD/MM/YYYY time`, resolving the century.
///
/// Returns `None` when the text does not have that shape.
fn widen_two_digit_year(text: &str) -> Option<String> {
    let (date_part, time_part) = match text.split_once(' ') {
        Some((date, time)) => (date, time.trim()),
        None => (text, "00:00"),
    };

    let mut segments = date_part.split('/');
    let day = segments.next()?;
    let month = segments.next()?;
    let year = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    if year.len() != 2 || !is_digits(day) || !is_digits(month) || !is_digits(year) {
        return None;
    }

    let short_year: u32 = year.parse().ok()?;
    let century = if short_year < CENTURY_PIVOT { 20 } else { 19 };
    Some(format!("{day}/{month}/{century}{year} {time_part}"))
}

/// Pull the hour out of a `"... - HH:MM"` entry.
fn extract_hour(text: &str) -> Option<u32> {
    let (_, time_part) = text.split_once(" - ")?;
    let (hour_text, _) = time_part.trim().split_once(':')?;
    let hour: u32 = hour_text.parse().ok()?;
    (hour <= 23).then_some(hour)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

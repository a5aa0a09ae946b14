//! Cell value rendering and spreadsheet placeholder handling.

use callrep_model::CellValue;

/// Literal artifacts that spreadsheet round-trips leave behind in place of
/// an empty cell. Matched exactly, after trimming.
const PLACEHOLDERS: &[&str] = &["nan", "None", "NaN", "NaT", "nat", ""];

pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDERS.contains(&text)
}

/// Formats a numeric cell as text. Whole values render without a decimal
/// part, undoing the float coercion spreadsheets apply to digit strings.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Renders a cell as display text. Placeholder strings and missing cells
/// come back as `None`.
pub fn text_value(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if is_placeholder(trimmed) {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        CellValue::Number(number) => Some(format_number(*number)),
        CellValue::DateTime(datetime) => {
            Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        CellValue::Missing => None,
    }
}

/// Renders a phone cell, undoing the float coercion spreadsheets apply to
/// long digit strings ("5531999998888.0" comes back as "5531999998888").
/// Non-numeric text is kept as written.
pub fn phone_value(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if is_placeholder(trimmed) {
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(number) if number.is_finite() => Some(format_number(number.trunc())),
                _ => Some(trimmed.to_string()),
            }
        }
        CellValue::Number(number) if number.is_finite() => Some(format_number(number.trunc())),
        CellValue::Number(_) | CellValue::DateTime(_) | CellValue::Missing => None,
    }
}

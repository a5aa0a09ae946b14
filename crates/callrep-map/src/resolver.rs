//! Column resolution.

use std::collections::BTreeSet;

use tracing::debug;

use callrep_model::{FieldMap, SemanticField};
use callrep_transform::normalize_text;

use crate::patterns::{
    NOTE_MARKER, OUTCOME_MARKER, SCALAR_ALIASES, TIMESTAMP_MARKERS, TIMESTAMP_SLOTS,
    timestamp_aliases,
};

/// Resolves a sheet's headers to semantic fields.
///
/// Resolution happens once per sheet, before any record is cleaned, and is
/// deterministic: the exact alias pass runs first, then the lenient passes
/// for fields that stayed unresolved. Each header is assigned to at most
/// one field, and fields without a matching header stay empty.
pub fn resolve_columns(headers: &[String]) -> FieldMap {
    let mut map = FieldMap::default();
    let mut assigned: BTreeSet<usize> = BTreeSet::new();

    for (field, aliases) in SCALAR_ALIASES {
        if let Some(index) = find_exact(headers, &assigned, aliases) {
            assign_scalar(&mut map, *field, &headers[index]);
            assigned.insert(index);
        }
    }

    for slot in 1..=TIMESTAMP_SLOTS {
        let aliases = timestamp_aliases(slot);
        let alias_refs: Vec<&str> = aliases.iter().map(String::as_str).collect();
        if let Some(index) = find_exact(headers, &assigned, &alias_refs) {
            debug!(slot, header = %headers[index], "resolved timestamp column");
            map.timestamps.push(headers[index].clone());
            assigned.insert(index);
        }
    }

    // Lenient passes for sheets that renamed columns beyond the known
    // aliases: substring matches on normalized header text.
    if map.outcome.is_none()
        && let Some(index) = find_contains(headers, &assigned, &[OUTCOME_MARKER])
    {
        assign_scalar(&mut map, SemanticField::Outcome, &headers[index]);
        assigned.insert(index);
    }
    if map.note.is_none()
        && let Some(index) = find_contains(headers, &assigned, &[NOTE_MARKER])
    {
        assign_scalar(&mut map, SemanticField::Note, &headers[index]);
        assigned.insert(index);
    }
    if map.timestamps.is_empty() {
        for (index, header) in headers.iter().enumerate() {
            if assigned.contains(&index) {
                continue;
            }
            let normalized = normalize_text(header);
            if TIMESTAMP_MARKERS
                .iter()
                .any(|marker| normalized.contains(marker))
            {
                debug!(header = %header, "resolved timestamp column by scan");
                map.timestamps.push(header.clone());
                assigned.insert(index);
            }
        }
    }

    map
}

/// First unassigned header equal to one of `aliases`, in alias order.
fn find_exact(headers: &[String], assigned: &BTreeSet<usize>, aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        let found = headers
            .iter()
            .enumerate()
            .find(|(index, header)| !assigned.contains(index) && header.as_str() == *alias);
        if let Some((index, _)) = found {
            return Some(index);
        }
    }
    None
}

/// First unassigned header whose normalized text contains one of `markers`.
fn find_contains(
    headers: &[String],
    assigned: &BTreeSet<usize>,
    markers: &[&str],
) -> Option<usize> {
    headers.iter().enumerate().find_map(|(index, header)| {
        if assigned.contains(&index) {
            return None;
        }
        let normalized = normalize_text(header);
        markers
            .iter()
            .any(|marker| normalized.contains(marker))
            .then_some(index)
    })
}

fn assign_scalar(map: &mut FieldMap, field: SemanticField, header: &str) {
    debug!(field = %field, header = %header, "resolved column");
    let slot = match field {
        SemanticField::CompanyId => &mut map.company_id,
        SemanticField::CompanyName => &mut map.company_name,
        SemanticField::Phone1 => &mut map.phone1,
        SemanticField::Phone2 => &mut map.phone2,
        SemanticField::Email => &mut map.email,
        SemanticField::Outcome => &mut map.outcome,
        SemanticField::Note => &mut map.note,
        SemanticField::Timestamp(_) => return,
    };
    *slot = Some(header.to_string());
}

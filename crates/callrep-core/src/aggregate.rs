//! Read-only aggregation over cleaned records.
//!
//! Nothing here mutates or copies record data beyond what the returned
//! views need; callers hand in a slice and get counts, histograms, and
//! filtered subsets back.

use std::collections::BTreeMap;

use callrep_model::{CleanRecord, OutcomeCategory, OutcomeCount, SheetSummary};

/// Outcome frequencies sorted by count descending, label ascending on ties.
pub fn outcome_distribution(records: &[CleanRecord]) -> Vec<(OutcomeCategory, usize)> {
    distribution_of(records.iter())
}

fn distribution_of<'a>(
    records: impl Iterator<Item = &'a CleanRecord>,
) -> Vec<(OutcomeCategory, usize)> {
    let mut counts: BTreeMap<OutcomeCategory, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.outcome.clone()).or_insert(0) += 1;
    }
    let mut distribution: Vec<(OutcomeCategory, usize)> = counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    distribution
}

/// Calls per hour of day, over every parsed timestamp of every record.
///
/// A record with three parsed timestamps contributes three counts. Records
/// without any parsed timestamp contribute nothing, so a workbook with no
/// timestamp columns yields an empty map.
pub fn hourly_call_volume(records: &[CleanRecord]) -> BTreeMap<u32, usize> {
    let mut volume = BTreeMap::new();
    for record in records {
        for timestamp in record.parsed_timestamps() {
            *volume.entry(timestamp.hour()).or_insert(0) += 1;
        }
    }
    volume
}

/// The actionable subset of a record slice: every record whose outcome is
/// anything other than "Não atende", in original order.
#[derive(Debug, Clone)]
pub struct ImportantObservations<'a> {
    pub records: Vec<&'a CleanRecord>,
    /// Size of the full slice the subset was taken from.
    pub total: usize,
    /// Share of the total, in percent rounded to one decimal.
    pub percent: f64,
    /// Outcome frequencies within the subset, count descending.
    pub outcome_counts: Vec<(OutcomeCategory, usize)>,
}

impl ImportantObservations<'_> {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn distinct_outcomes(&self) -> usize {
        self.outcome_counts.len()
    }
}

pub fn important_observations(records: &[CleanRecord]) -> ImportantObservations<'_> {
    let kept: Vec<&CleanRecord> = records
        .iter()
        .filter(|record| record.outcome.is_notable())
        .collect();
    let total = records.len();
    let percent = if total == 0 {
        0.0
    } else {
        round_one_decimal(kept.len() as f64 / total as f64 * 100.0)
    };
    let outcome_counts = distribution_of(kept.iter().copied());
    ImportantObservations {
        records: kept,
        total,
        percent,
        outcome_counts,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Coverage and outcome metrics for one sheet's records.
pub fn summarize(sheet: &str, records: &[CleanRecord]) -> SheetSummary {
    let distribution = outcome_distribution(records);
    let top_outcomes = distribution
        .iter()
        .take(3)
        .map(|(category, count)| OutcomeCount {
            label: category.label().to_string(),
            count: *count,
        })
        .collect();
    SheetSummary {
        sheet: sheet.to_string(),
        records: records.len(),
        with_phone1: records.iter().filter(|r| r.phone1.is_some()).count(),
        with_phone2: records.iter().filter(|r| r.phone2.is_some()).count(),
        with_any_phone: records.iter().filter(|r| r.has_any_phone()).count(),
        with_email: records.iter().filter(|r| r.email.is_some()).count(),
        distinct_outcomes: distribution.len(),
        top_outcomes,
    }
}

pub mod cell;
pub mod fields;
pub mod outcome;
pub mod record;
pub mod summary;

pub use cell::{CellValue, RawRecord, RawSheet, Workbook};
pub use fields::{FieldMap, SemanticField};
pub use outcome::OutcomeCategory;
pub use record::{CallTimestamp, CleanRecord};
pub use summary::{OutcomeCount, SheetSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels_match_sheet_wording() {
        assert_eq!(OutcomeCategory::NotReached.label(), "Não atende");
        assert_eq!(OutcomeCategory::NotInformed.label(), "Não informado");
        assert_eq!(
            OutcomeCategory::Other("Ligar depois".to_string()).label(),
            "Ligar depois"
        );
    }

    #[test]
    fn summary_serializes() {
        let summary = SheetSummary {
            sheet: "Campanha".to_string(),
            records: 2,
            with_phone1: 2,
            with_phone2: 1,
            with_any_phone: 2,
            with_email: 1,
            distinct_outcomes: 2,
            top_outcomes: vec![OutcomeCount {
                label: "Não atende".to_string(),
                count: 2,
            }],
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: SheetSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.sheet, "Campanha");
        assert_eq!(round.top_outcomes.len(), 1);
    }
}

//! Header alias tables.
//!
//! The aliases are plain data: each semantic field lists the exact header
//! spellings seen across the legacy sheets, most common first. Adding a
//! newly observed spelling means adding one entry here.

use callrep_model::SemanticField;

/// Exact header aliases per scalar field. Matching is case-sensitive and
/// the first alias present in the sheet wins.
pub const SCALAR_ALIASES: &[(SemanticField, &[&str])] = &[
    (SemanticField::CompanyId, &["CNPJ"]),
    (SemanticField::CompanyName, &["RAZÃO SOCIAL"]),
    (SemanticField::Phone1, &["TEL 1", "TEL1"]),
    (SemanticField::Phone2, &["TEL 2", "TEL2"]),
    (SemanticField::Email, &["E-MAIL", "EMAIL"]),
    (SemanticField::Outcome, &["SITUAÇÃO", "SITUACAO"]),
    (SemanticField::Note, &["OBSERVAÇÃO", "OBSERVACAO"]),
];

/// How many numbered call timestamp columns a sheet can carry.
pub const TIMESTAMP_SLOTS: u8 = 3;

/// Header spellings for call timestamp slot `slot` (1-based).
pub fn timestamp_aliases(slot: u8) -> [String; 4] {
    [
        format!("Data / Hora {slot}"),
        format!("Data_Hora_{slot}"),
        format!("Data Hora {slot}"),
        format!("Data_Hora {slot}"),
    ]
}

/// Normalized substrings the lenient passes look for.
pub const OUTCOME_MARKER: &str = "situacao";
pub const NOTE_MARKER: &str = "observacao";
pub const TIMESTAMP_MARKERS: &[&str] = &["data", "hora"];

#[cfg(test)]
mod tests {
    use super::{SCALAR_ALIASES, timestamp_aliases};
    use callrep_model::SemanticField;

    #[test]
    fn every_scalar_field_has_at_least_one_alias() {
        for (field, aliases) in SCALAR_ALIASES {
            assert!(!aliases.is_empty(), "no aliases for {field}");
        }
    }

    #[test]
    fn scalar_fields_are_listed_once() {
        for (index, (field, _)) in SCALAR_ALIASES.iter().enumerate() {
            let later = &SCALAR_ALIASES[index + 1..];
            assert!(
                later.iter().all(|(other, _)| other != field),
                "{field} listed twice"
            );
        }
    }

    #[test]
    fn timestamp_aliases_cover_the_observed_spellings() {
        let aliases = timestamp_aliases(2);
        assert_eq!(aliases[0], "Data / Hora 2");
        assert_eq!(aliases[1], "Data_Hora_2");
        assert_eq!(aliases[2], "Data Hora 2");
        assert_eq!(aliases[3], "Data_Hora 2");
    }

    #[test]
    fn alias_order_puts_the_canonical_spelling_first() {
        let (field, aliases) = SCALAR_ALIASES[2];
        assert_eq!(field, SemanticField::Phone1);
        assert_eq!(aliases[0], "TEL 1");
    }
}

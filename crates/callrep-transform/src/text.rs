//! Text normalization for comparisons.
//!
//! The legacy sheets were typed by hand, so the same label shows up with
//! varying case and with or without accents. Comparisons run on the
//! normalized form; display always keeps the original.

/// Accented characters seen in the sheets, folded to their base letter.
const ACCENT_FOLD: &[(&[char], char)] = &[
    (&['á', 'à', 'ã', 'â', 'ä'], 'a'),
    (&['é', 'è', 'ê', 'ë'], 'e'),
    (&['í', 'ì', 'î', 'ï'], 'i'),
    (&['ó', 'ò', 'õ', 'ô', 'ö'], 'o'),
    (&['ú', 'ù', 'û', 'ü'], 'u'),
    (&['ç'], 'c'),
];

/// Trims, lowercases and folds accents so that values written with
/// inconsistent casing or accents compare equal.
pub fn normalize_text(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for ch in raw.trim().to_lowercase().chars() {
        let folded = ACCENT_FOLD
            .iter()
            .find(|(accented, _)| accented.contains(&ch))
            .map(|(_, base)| *base)
            .unwrap_or(ch);
        normalized.push(folded);
    }
    normalized
}

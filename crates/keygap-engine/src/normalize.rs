//! Text normalization.
//!
//! Two normalizers are provided. [`fold_text`] is used before keyword extraction: it strips
//! diacritics via NFKD decomposition, then applies [`normalize_light`]. [`normalize_light`]
//! only unifies quotes and spaces and is used when cleaning role titles, where the original
//! spelling should survive.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Maps typographic quote variants to ASCII and non-breaking spaces to a plain space.
fn unify_char(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '`' => '\'',
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
        other => other,
    }
}

/// Unifies quotes and spaces, collapses whitespace runs and trims.
pub fn normalize_light(text: &str) -> String {
    let unified: String = text.chars().map(unify_char).collect();
    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folds text to its ASCII-leaning form for keyword extraction.
///
/// Applies NFKD decomposition and drops combining marks ("résumé" becomes "resume"), then
/// the light normalization.
pub fn fold_text(text: &str) -> String {
    let stripped: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    normalize_light(&stripped)
}

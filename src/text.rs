//! Input normalization.
//!
//! Guests write Czech with or without diacritics ("příští" / "pristi"), with
//! arbitrary casing and whitespace. All rule patterns and choice keywords
//! match against the normalized form produced here.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, fold diacritics away (NFD, drop combining marks) and collapse
/// runs of whitespace into single spaces. Leading/trailing whitespace is
/// trimmed.
pub fn normalize(input: &str) -> String {
    let folded: String = input.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut out = String::with_capacity(folded.len());
    for word in folded.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

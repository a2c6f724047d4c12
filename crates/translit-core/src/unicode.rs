//! Character-level helpers shared by the compiler and the matcher.
//!
//! All lengths in this crate are counted in `char`s (Unicode scalar values).
//! A supplementary-plane character is one unit, never two.

use unicode_normalization::UnicodeNormalization;

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset just past the first `n` chars of `s` (or `s.len()` if shorter).
pub fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// First char of the lowercase mapping of `c`.
///
/// Multi-char mappings (e.g. `İ` → `i̇`) keep only their leading char, which
/// is all the prefix index needs.
pub fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Canonically composed (NFC) form.
pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Canonically decomposed (NFD) form.
pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

/// `s` together with its NFC and NFD forms, deduplicated, original first.
pub fn normalization_forms(s: &str) -> Vec<String> {
    let mut forms = vec![s.to_string()];
    for form in [nfc(s), nfd(s)] {
        if !forms.contains(&form) {
            forms.push(form);
        }
    }
    forms
}

/// Last char of `s`, lowercased.
pub fn last_char_lower(s: &str) -> Option<char> {
    s.chars().next_back().map(lower_char)
}

/// First char of `s`, lowercased.
pub fn first_char_lower(s: &str) -> Option<char> {
    s.chars().next().map(lower_char)
}

/// Case-insensitive `starts_with` for short ASCII/latin onsets.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars().map(lower_char);
    prefix
        .chars()
        .map(lower_char)
        .all(|p| chars.next() == Some(p))
}

//! Voiced (dakuten) and semi-voiced (handakuten) sound marks.

use unicode_normalization::UnicodeNormalization;

pub const VOICED_MARK: char = '\u{3099}';
pub const SEMI_VOICED_MARK: char = '\u{309A}';
pub const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}';
pub const HALFWIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';

/// `kana` with the combining voiced mark, composed where a precomposed
/// letter exists (`か` → `が`, `わ` stays `わ` + U+3099).
pub fn voiced(kana: &str) -> String {
    with_mark(kana, VOICED_MARK)
}

/// `kana` with the combining semi-voiced mark, composed (`は` → `ぱ`).
pub fn semi_voiced(kana: &str) -> String {
    with_mark(kana, SEMI_VOICED_MARK)
}

/// Spellings of a voiced halfwidth letter: halfwidth mark, then combining.
pub fn halfwidth_voiced(kana: &str) -> [String; 2] {
    [
        format!("{kana}{HALFWIDTH_VOICED_MARK}"),
        format!("{kana}{VOICED_MARK}"),
    ]
}

/// Spellings of a semi-voiced halfwidth letter: halfwidth mark, then combining.
pub fn halfwidth_semi_voiced(kana: &str) -> [String; 2] {
    [
        format!("{kana}{HALFWIDTH_SEMI_VOICED_MARK}"),
        format!("{kana}{SEMI_VOICED_MARK}"),
    ]
}

fn with_mark(kana: &str, mark: char) -> String {
    kana.chars().chain(std::iter::once(mark)).nfc().collect()
}

//! Romaji, hiragana and katakana conversion on top of `translit-core`.
//!
//! ```
//! use translit_kana::KanaConverter;
//!
//! let kana = KanaConverter::new();
//! assert_eq!(kana.to_hiragana("konnichiha"), "こんにちは");
//! assert_eq!(kana.to_katakana("ko-hi-"), "コーヒー");
//! ```

mod converter;
pub mod rules;
pub mod table;
pub mod voiced;

#[cfg(test)]
mod tests;

pub use converter::KanaConverter;
pub use rules::{hiragana_rules, katakana_rules};
pub use table::{KanaTable, KanaTableError};

//! Kana tables, embedded by default via `include_str!("default_kana.toml")`.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");

/// One letter or digraph in all three scripts.
#[derive(Debug, Clone, Deserialize)]
pub struct KanaRow {
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
}

/// Sound marks a halfwidth letter can take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Voicing {
    #[default]
    Plain,
    /// Voiced mark only (`ｶ` → `ｶﾞ`).
    Voiced,
    /// Voiced and semi-voiced marks (`ﾊ` → `ﾊﾞ`, `ﾊﾟ`).
    SemiVoiced,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HalfwidthRow {
    pub hiragana: String,
    pub katakana: String,
    #[serde(default)]
    pub voicing: Voicing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PunctuationRow {
    pub romaji: String,
    pub kana: String,
}

/// Single-direction mapping for marks that exist in one script only.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraRow {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KanaTable {
    pub kana: Vec<KanaRow>,
    pub small_kana: Vec<KanaRow>,
    pub digraphs: Vec<KanaRow>,
    pub rare_katakana: Vec<KanaRow>,
    pub ime: Vec<KanaRow>,
    pub halfwidth: Vec<HalfwidthRow>,
    pub punctuation: Vec<PunctuationRow>,
    pub katakana_extra: Vec<ExtraRow>,
    pub hiragana_extra: Vec<ExtraRow>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty entry in [{section}] table")]
    EmptyEntry { section: &'static str },
    #[error(transparent)]
    Rules(#[from] translit_core::RuleTableError),
}

impl KanaTable {
    /// Parse and validate a kana table.
    pub fn parse(toml_str: &str) -> Result<Self, KanaTableError> {
        let table: KanaTable =
            toml::from_str(toml_str).map_err(|e| KanaTableError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// The embedded default table, parsed once.
    pub fn embedded() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            KanaTable::parse(DEFAULT_KANA_TOML).expect("embedded kana TOML must be valid")
        })
    }

    fn validate(&self) -> Result<(), KanaTableError> {
        let sections = [
            ("kana", &self.kana),
            ("small_kana", &self.small_kana),
            ("digraphs", &self.digraphs),
            ("rare_katakana", &self.rare_katakana),
            ("ime", &self.ime),
        ];
        for (section, rows) in sections {
            if rows
                .iter()
                .any(|r| r.hiragana.is_empty() || r.katakana.is_empty() || r.romaji.is_empty())
            {
                return Err(KanaTableError::EmptyEntry { section });
            }
        }
        if self
            .halfwidth
            .iter()
            .any(|r| r.hiragana.is_empty() || r.katakana.is_empty())
        {
            return Err(KanaTableError::EmptyEntry {
                section: "halfwidth",
            });
        }
        if self
            .punctuation
            .iter()
            .any(|r| r.romaji.is_empty() || r.kana.is_empty())
        {
            return Err(KanaTableError::EmptyEntry {
                section: "punctuation",
            });
        }
        for (section, rows) in [
            ("katakana_extra", &self.katakana_extra),
            ("hiragana_extra", &self.hiragana_extra),
        ] {
            if rows.iter().any(|r| r.from.is_empty() || r.to.is_empty()) {
                return Err(KanaTableError::EmptyEntry { section });
            }
        }
        Ok(())
    }
}

use tracing::debug;
use translit_core::{compile, convert, parse_rules_toml, CompiledRuleSet, RuleSet};

use crate::rules::{hiragana_rules_from, katakana_rules_from};
use crate::table::{KanaTable, KanaTableError};

/// Converts romaji and kana to hiragana or katakana.
///
/// Owns one compiled rule set per target script; build it once and share it
/// (it is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct KanaConverter {
    hiragana: CompiledRuleSet,
    katakana: CompiledRuleSet,
}

impl KanaConverter {
    /// Converter over the embedded kana table.
    pub fn new() -> Self {
        Self::from_table(KanaTable::embedded())
    }

    pub fn from_table(table: &KanaTable) -> Self {
        Self::from_rules(&hiragana_rules_from(table), &katakana_rules_from(table))
    }

    /// Converter over the embedded table with a user `[mappings]` table laid
    /// on top of both scripts. Custom keys replace the defaults.
    pub fn with_custom_rules(toml_str: &str) -> Result<Self, KanaTableError> {
        let custom = parse_rules_toml(toml_str)?;
        debug!(rules = custom.len(), "custom kana rules loaded");
        let table = KanaTable::embedded();
        let hiragana = RuleSet::concat([hiragana_rules_from(table), custom.clone()]);
        let katakana = RuleSet::concat([katakana_rules_from(table), custom]);
        Ok(Self::from_rules(&hiragana, &katakana))
    }

    fn from_rules(hiragana: &RuleSet, katakana: &RuleSet) -> Self {
        Self {
            hiragana: compile(hiragana),
            katakana: compile(katakana),
        }
    }

    pub fn to_hiragana(&self, input: &str) -> String {
        convert(input, &self.hiragana)
    }

    pub fn to_katakana(&self, input: &str) -> String {
        convert(input, &self.katakana)
    }

    pub fn hiragana_rules(&self) -> &CompiledRuleSet {
        &self.hiragana
    }

    pub fn katakana_rules(&self) -> &CompiledRuleSet {
        &self.katakana
    }
}

impl Default for KanaConverter {
    fn default() -> Self {
        Self::new()
    }
}

//! Rule sets converting any mix of romaji and kana to one script.
//!
//! Each set lists its parts in increasing precedence: a later rule replaces
//! an earlier one with the same key.

use translit_core::patterns::{
    geminates, long_vowel_variants, prolonged_vowel, quoted_vowel, syllabic_nasal,
};
use translit_core::{Rule, RuleSet};

use crate::table::{ExtraRow, HalfwidthRow, KanaRow, KanaTable, Voicing};
use crate::voiced::{halfwidth_semi_voiced, halfwidth_voiced, semi_voiced, voiced};

/// Consonants whose doubling writes a small tsu. `nn` is the syllabic nasal.
const GEMINATE_CONSONANTS: &str = "bcdfghjkmprstvwyz";

/// Text after `nn` that starts a new syllable with the second `n`.
const SYLLABLE_ONSETS: [&str; 9] = ["a", "i", "u", "e", "o", "ya", "yu", "ye", "yo"];

const VOWELS: [char; 5] = ['a', 'i', 'u', 'e', 'o'];

pub const PROLONGED_SOUND_MARK: &str = "ー";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    fn pick<'a>(self, hiragana: &'a str, katakana: &'a str) -> &'a str {
        match self {
            Script::Hiragana => hiragana,
            Script::Katakana => katakana,
        }
    }

    fn of(self, row: &KanaRow) -> &str {
        self.pick(&row.hiragana, &row.katakana)
    }

    fn vowels(self) -> [&'static str; 5] {
        match self {
            Script::Hiragana => ["あ", "い", "う", "え", "お"],
            Script::Katakana => ["ア", "イ", "ウ", "エ", "オ"],
        }
    }
}

/// Katakana and romaji to hiragana, from the embedded table.
pub fn hiragana_rules() -> RuleSet {
    hiragana_rules_from(KanaTable::embedded())
}

/// Hiragana and romaji to katakana, from the embedded table.
pub fn katakana_rules() -> RuleSet {
    katakana_rules_from(KanaTable::embedded())
}

pub fn hiragana_rules_from(table: &KanaTable) -> RuleSet {
    RuleSet::concat([
        katakana_to_hiragana(table),
        romaji_to_kana(table, Script::Hiragana),
    ])
}

/// Katakana rules also read doubled romaji vowels as a prolonged sound
/// (`aa` → `アー`).
pub fn katakana_rules_from(table: &KanaTable) -> RuleSet {
    RuleSet::concat([
        hiragana_to_katakana(table),
        romaji_to_kana(table, Script::Katakana),
        prolonged_vowels(),
    ])
}

fn katakana_to_hiragana(table: &KanaTable) -> RuleSet {
    let to_hiragana = |rows: &[KanaRow]| -> RuleSet {
        rows.iter()
            .map(|r| Rule::literal(&r.katakana, &r.hiragana))
            .collect()
    };
    RuleSet::concat([
        to_hiragana(&table.kana),
        to_hiragana(&table.small_kana),
        extras(&table.katakana_extra),
        to_hiragana(&table.rare_katakana),
        halfwidth(&table.halfwidth),
    ])
}

fn hiragana_to_katakana(table: &KanaTable) -> RuleSet {
    let to_katakana = |rows: &[KanaRow]| -> RuleSet {
        rows.iter()
            .map(|r| Rule::literal(&r.hiragana, &r.katakana))
            .collect()
    };
    RuleSet::concat([
        to_katakana(&table.kana),
        to_katakana(&table.small_kana),
        extras(&table.hiragana_extra),
    ])
}

fn extras(rows: &[ExtraRow]) -> RuleSet {
    rows.iter().map(|r| Rule::literal(&r.from, &r.to)).collect()
}

/// Halfwidth katakana to hiragana, including voiced forms spelled with
/// either the halfwidth or the combining marks.
fn halfwidth(rows: &[HalfwidthRow]) -> RuleSet {
    let mut rules = RuleSet::new();
    for row in rows {
        rules.push(Rule::literal(&row.katakana, &row.hiragana));
        if row.voicing == Voicing::Plain {
            continue;
        }
        let output = voiced(&row.hiragana);
        for key in halfwidth_voiced(&row.katakana) {
            rules.push(Rule::literal(key, output.clone()));
        }
        if row.voicing == Voicing::SemiVoiced {
            let output = semi_voiced(&row.hiragana);
            for key in halfwidth_semi_voiced(&row.katakana) {
                rules.push(Rule::literal(key, output.clone()));
            }
        }
    }
    rules
}

fn romaji_to_kana(table: &KanaTable, script: Script) -> RuleSet {
    let from_romaji = |rows: &[KanaRow]| -> RuleSet {
        rows.iter()
            .map(|r| Rule::literal(&r.romaji, script.of(r)))
            .collect()
    };
    let punctuation: RuleSet = table
        .punctuation
        .iter()
        .map(|r| Rule::literal(&r.romaji, &r.kana))
        .collect();
    let quoted: RuleSet = VOWELS
        .iter()
        .zip(script.vowels())
        .map(|(&v, kana)| quoted_vowel(v, kana))
        .collect();
    let nasal = syllabic_nasal("nn", script.pick("ん", "ン"), &SYLLABLE_ONSETS);

    let rules = RuleSet::concat([
        from_romaji(&table.kana),
        from_romaji(&table.digraphs),
        punctuation,
        geminates(GEMINATE_CONSONANTS, script.pick("っ", "ッ")),
        quoted,
        from_romaji(&table.ime),
        RuleSet::from(nasal),
    ]);
    long_vowel_variants(&rules, PROLONGED_SOUND_MARK)
}

fn prolonged_vowels() -> RuleSet {
    VOWELS
        .iter()
        .zip(Script::Katakana.vowels())
        .map(|(&v, kana)| prolonged_vowel(v, kana, PROLONGED_SOUND_MARK))
        .collect()
}

//! Contextual rule constructors for phonetic tables.
//!
//! These cover the cases a plain longest-match table cannot express on its
//! own: doubled consonants, long vowels written with diacritics or as vowel
//! runs, quoted vowels and the doubled syllabic nasal.

use crate::rule::{Outcome, Rule, RuleAction, RuleSet};
use crate::unicode::{
    char_len, first_char_lower, last_char_lower, lower_char, starts_with_ignore_case,
};

const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];
const CIRCUMFLEX: [char; 10] = ['â', 'ê', 'î', 'ô', 'û', 'Â', 'Ê', 'Î', 'Ô', 'Û'];
const MACRON: [char; 10] = ['ā', 'ē', 'ī', 'ō', 'ū', 'Ā', 'Ē', 'Ī', 'Ō', 'Ū'];

/// Doubled consonant: `cc` emits `marker` and consumes only the first `c`,
/// leaving the second to start the next syllable.
pub fn geminate(consonant: char, marker: &str) -> Rule {
    let key: String = [consonant, consonant].iter().collect();
    Rule::literal_with_length(key, marker, 1)
}

/// [`geminate`] for every char in `consonants`.
pub fn geminates(consonants: &str, marker: &str) -> RuleSet {
    consonants.chars().map(|c| geminate(c, marker)).collect()
}

/// Add circumflex and macron variants of every literal rule whose key ends in
/// a latin vowel. `kā` and `kâ` map to the output of `ka` followed by `mark`.
/// Variants are placed right after their base rule.
pub fn long_vowel_variants(rules: &RuleSet, mark: &str) -> RuleSet {
    rules.transform(|rule| {
        let mut out = vec![rule.clone()];
        let RuleAction::Literal { output, length } = rule.action() else {
            return out;
        };
        let Some((stem, vowel)) = split_trailing_vowel(rule.key()) else {
            return out;
        };
        let long_output = format!("{output}{mark}");
        for table in [&CIRCUMFLEX, &MACRON] {
            let key = format!("{stem}{}", table[vowel]);
            out.push(match length {
                Some(n) => Rule::literal_with_length(key, long_output.clone(), *n),
                None => Rule::literal(key, long_output.clone()),
            });
        }
        out
    })
}

fn split_trailing_vowel(key: &str) -> Option<(&str, usize)> {
    let last = key.chars().next_back()?;
    let idx = VOWELS.iter().position(|&v| v == last)?;
    Some((&key[..key.len() - last.len_utf8()], idx))
}

/// Bare vowel that turns into `mark` when it repeats the previous trigger's
/// final vowel and is not itself followed by the same vowel.
///
/// With `output = "A"`: `aa` → `A-`, `aaa` → `AA-`, `kaa` → `KA-`
/// (given a `ka` rule). Comparison ignores case.
pub fn prolonged_vowel(vowel: char, output: &str, mark: &str) -> Rule {
    let vowel = lower_char(vowel);
    let mark = mark.to_string();
    Rule::computed_with_output(vowel.to_string(), output, move |ctx| {
        let repeats_previous = last_char_lower(ctx.last_input) == Some(vowel);
        let run_continues = first_char_lower(ctx.remaining) == Some(vowel);
        if repeats_previous && !run_continues {
            Outcome::emit(mark.clone(), 1)
        } else {
            Outcome::declared(1)
        }
    })
}

/// `'v` spelling out a repeated vowel, as in `ka'a`. Applies only right after
/// a trigger ending in the same vowel; otherwise rejected so the apostrophe
/// falls back to shorter rules.
pub fn quoted_vowel(vowel: char, output: &str) -> Rule {
    let vowel = lower_char(vowel);
    Rule::computed_with_output(format!("'{vowel}"), output, move |ctx| {
        if last_char_lower(ctx.last_input) == Some(vowel) {
            Outcome::declared(char_len(ctx.input))
        } else {
            Outcome::Reject
        }
    })
}

/// Doubled nasal (`nn`) read as a mora-final nasal.
///
/// When the text after the trigger starts a new syllable (one of `onsets`,
/// case-insensitive) the rule rejects, so the matcher falls back to the single
/// nasal and lets the second one open the syllable: `nna` → `n` + `na`.
pub fn syllabic_nasal(key: &str, nasal: &str, onsets: &[&str]) -> Rule {
    let onsets: Vec<String> = onsets.iter().map(|s| s.to_lowercase()).collect();
    Rule::computed_with_output(key, nasal, move |ctx| {
        if onsets
            .iter()
            .any(|onset| starts_with_ignore_case(ctx.remaining, onset))
        {
            Outcome::Reject
        } else {
            Outcome::declared(char_len(ctx.input))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::convert::convert;

    fn keys(set: &RuleSet) -> Vec<&str> {
        set.iter().map(|r| r.key()).collect()
    }

    #[test]
    fn test_geminate_rule() {
        let r = geminate('k', "X");
        assert_eq!(r.key(), "kk");
        assert_eq!(r.output(), Some("X"));
        assert!(matches!(
            r.action(),
            RuleAction::Literal {
                length: Some(1),
                ..
            }
        ));
        assert_eq!(geminates("kst", "X").len(), 3);
    }

    #[test]
    fn test_long_vowel_variants() {
        let rules = RuleSet::from(vec![
            Rule::literal("ka", "カ"),
            Rule::literal("n", "ン"),
            Rule::literal("KO", "コ"),
        ]);
        let out = long_vowel_variants(&rules, "ー");
        assert_eq!(keys(&out), vec!["ka", "kâ", "kā", "n", "KO", "KÔ", "KŌ"]);
        assert_eq!(out.iter().nth(2).and_then(|r| r.output()), Some("カー"));
    }

    #[test]
    fn test_long_vowel_variants_skip_computed() {
        let rules = RuleSet::from(quoted_vowel('a', "ア"));
        let out = long_vowel_variants(&rules, "ー");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_long_vowel_variants_match_decomposed_input() {
        let rules = long_vowel_variants(&RuleSet::from(Rule::literal("ka", "カ")), "ー");
        let compiled = compile(&rules);
        assert_eq!(convert("kā", &compiled), "カー");
        assert_eq!(convert("ka\u{304}", &compiled), "カー");
        assert_eq!(convert("KÂ", &compiled), "カー");
    }

    #[test]
    fn test_prolonged_vowel_runs() {
        let compiled = compile(&RuleSet::from(prolonged_vowel('a', "A", "-")));
        assert_eq!(convert("a", &compiled), "A");
        assert_eq!(convert("aa", &compiled), "A-");
        assert_eq!(convert("aaa", &compiled), "AA-");
        assert_eq!(convert("aaaa", &compiled), "AAA-");
        assert_eq!(convert("AaAa", &compiled), "AAA-");
    }

    #[test]
    fn test_prolonged_vowel_after_syllable() {
        let compiled = compile(&RuleSet::from(vec![
            Rule::literal("ka", "KA"),
            prolonged_vowel('a', "A", "-"),
        ]));
        assert_eq!(convert("kaa", &compiled), "KA-");
        assert_eq!(convert("kaaa", &compiled), "KAA-");
    }

    #[test]
    fn test_quoted_vowel() {
        let compiled = compile(&RuleSet::from(vec![
            Rule::literal("a", "ア"),
            Rule::literal("ka", "カ"),
            Rule::literal("'", "＇"),
            quoted_vowel('a', "ア"),
        ]));
        assert_eq!(convert("ka'a", &compiled), "カア");
        assert_eq!(convert("KA'A", &compiled), "カア");
        // Not preceded by the same vowel: the apostrophe stands alone.
        assert_eq!(convert("'a", &compiled), "＇ア");
    }

    #[test]
    fn test_syllabic_nasal() {
        let onsets = ["a", "i", "u", "e", "o", "ya", "yu", "ye", "yo"];
        let compiled = compile(&RuleSet::from(vec![
            Rule::literal("n", "ン"),
            Rule::literal("na", "ナ"),
            Rule::literal("nya", "ニャ"),
            Rule::literal("ka", "カ"),
            syllabic_nasal("nn", "ン", &onsets),
        ]));
        assert_eq!(convert("nn", &compiled), "ン");
        assert_eq!(convert("nnka", &compiled), "ンカ");
        assert_eq!(convert("nna", &compiled), "ンナ");
        assert_eq!(convert("NNYA", &compiled), "ンニャ");
    }
}

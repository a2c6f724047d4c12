//! Property-based tests for the scan driver.
//!
//! Random rule sets mixing literal, computed, rejecting and zero-length rules
//! are applied to random text over a small alphabet.

use proptest::prelude::*;

use crate::compile::{compile, CompiledRuleSet};
use crate::convert::{convert, step, MatchContext};
use crate::rule::{Outcome, Rule, RuleSet};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum RuleKind {
    Literal(String),
    LiteralWithLength(String, usize),
    Rewrite(String),
    Reject,
    Skip(usize),
}

fn arb_text(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'k', 'A', 'K', 'é', '😀', '\u{301}']),
        0..max,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_kind() -> impl Strategy<Value = RuleKind> {
    prop_oneof![
        4 => arb_text(3).prop_map(RuleKind::Literal),
        1 => (arb_text(3), 0..4usize).prop_map(|(o, n)| RuleKind::LiteralWithLength(o, n)),
        1 => arb_text(2).prop_map(RuleKind::Rewrite),
        1 => Just(RuleKind::Reject),
        1 => (0..5usize).prop_map(RuleKind::Skip),
    ]
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (arb_text(4).prop_filter("non-empty key", |k| !k.is_empty()), arb_kind()).prop_map(
        |(key, kind)| match kind {
            RuleKind::Literal(out) => Rule::literal(key, out),
            RuleKind::LiteralWithLength(out, n) => Rule::literal_with_length(key, out, n),
            RuleKind::Rewrite(out) => Rule::computed(key, move |_| Outcome::emit(out.clone(), 0)),
            RuleKind::Reject => Rule::computed(key, |_| Outcome::Reject),
            RuleKind::Skip(n) => Rule::computed(key, move |_| Outcome::emit("#", n)),
        },
    )
}

fn arb_rules() -> impl Strategy<Value = CompiledRuleSet> {
    prop::collection::vec(arb_rule(), 0..12).prop_map(|rules| compile(&RuleSet::from(rules)))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn convert_is_deterministic(rules in arb_rules(), input in arb_text(24)) {
        prop_assert_eq!(convert(&input, &rules), convert(&input, &rules));
    }

    #[test]
    fn empty_rule_set_is_identity(input in arb_text(24)) {
        let rules = compile(&RuleSet::new());
        prop_assert_eq!(convert(&input, &rules), input);
    }

    #[test]
    fn scan_always_terminates(rules in arb_rules(), input in arb_text(24)) {
        let total = input.chars().count();
        let mut ctx = MatchContext::new();
        let mut rest = input.as_str();
        let mut steps = 0usize;
        while !rest.is_empty() {
            let result = step(rest, &rules, &ctx);
            rest = result.rest(rest);
            ctx = result.context;
            steps += 1;
            // A zero-length step is always followed by an advancing one.
            prop_assert!(steps <= 2 * total);
        }
    }

    #[test]
    fn steps_concatenate_to_convert(rules in arb_rules(), input in arb_text(24)) {
        let mut out = String::new();
        let mut ctx = MatchContext::new();
        let mut rest = input.as_str();
        let mut last_len = 0usize;
        while !rest.is_empty() {
            let result = step(rest, &rules, &ctx);
            if result.replaces_previous {
                out.truncate(out.len() - last_len);
            }
            out.push_str(&result.output);
            last_len = result.output.len();
            rest = result.rest(rest);
            ctx = result.context;
        }
        prop_assert_eq!(out, convert(&input, &rules));
    }
}

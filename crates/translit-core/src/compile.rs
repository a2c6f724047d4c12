use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::rule::{Rule, RuleSet};
use crate::unicode::{char_len, lower_char, normalization_forms};

/// Immutable lookup structure built from a [`RuleSet`].
///
/// Holds the deduplicated rules, a key → rule index expanded with the NFC and
/// NFD forms of every key, and the longest key length (in chars) per leading
/// char. Never mutated after [`compile`], so it can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    rules: Vec<Rule>,
    mappings: HashMap<String, usize>,
    max_len_by_prefix: HashMap<char, usize>,
}

/// Compile a rule set for use with [`convert`](crate::convert).
pub fn compile(rules: &RuleSet) -> CompiledRuleSet {
    CompiledRuleSet::new(rules)
}

impl CompiledRuleSet {
    pub fn new(rule_set: &RuleSet) -> Self {
        let _span = debug_span!("compile", rule_count = rule_set.len()).entered();

        // Position of the last rule registered under each key.
        let mut last_by_key: HashMap<&str, usize> = HashMap::new();
        for (i, rule) in rule_set.iter().enumerate() {
            last_by_key.insert(rule.key(), i);
        }

        let mut rules = Vec::with_capacity(last_by_key.len());
        let mut mappings = HashMap::new();
        // Expanded in registration order: a later rule takes over every string
        // it claims, whether literally or through a normalization form.
        for (i, rule) in rule_set.iter().enumerate() {
            if last_by_key.get(rule.key()) != Some(&i) {
                continue;
            }
            let idx = rules.len();
            for form in normalization_forms(rule.key()) {
                mappings.insert(form, idx);
            }
            rules.push(rule.clone());
        }

        let mut max_len_by_prefix: HashMap<char, usize> = HashMap::new();
        for key in mappings.keys() {
            let Some(first) = key.chars().next() else {
                continue;
            };
            let len = char_len(key);
            let slot = max_len_by_prefix.entry(first).or_insert(0);
            *slot = (*slot).max(len);
        }

        debug!(
            rules = rules.len(),
            keys = mappings.len(),
            prefixes = max_len_by_prefix.len()
        );

        Self {
            rules,
            mappings,
            max_len_by_prefix,
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.mappings.get(key).map(|&i| &self.rules[i])
    }

    /// Lookup as the matcher does it: exact case first, then lowercased.
    pub fn lookup(&self, key: &str) -> Option<&Rule> {
        self.get(key).or_else(|| {
            let lower = key.to_lowercase();
            if lower != key {
                self.get(&lower)
            } else {
                None
            }
        })
    }

    /// Longest key length starting with `c`, trying `c` and its lowercase form.
    pub fn max_key_len(&self, c: char) -> Option<usize> {
        let exact = self.max_len_by_prefix.get(&c).copied();
        let lower = lower_char(c);
        let folded = if lower != c {
            self.max_len_by_prefix.get(&lower).copied()
        } else {
            None
        };
        match (exact, folded) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// All keys, including normalization aliases.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(|k| k.as_str())
    }

    /// Number of distinct rules after deduplication.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of lookup keys, including normalization aliases.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl From<&RuleSet> for CompiledRuleSet {
    fn from(rules: &RuleSet) -> Self {
        CompiledRuleSet::new(rules)
    }
}

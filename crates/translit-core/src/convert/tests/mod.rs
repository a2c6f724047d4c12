mod proptest_convert;

use crate::compile::{compile, CompiledRuleSet};
use crate::rule::{Rule, RuleSet};

/// Compile literal `(key, output)` pairs.
pub(super) fn literal_rules(pairs: &[(&str, &str)]) -> CompiledRuleSet {
    let rules: RuleSet = pairs.iter().map(|&(k, v)| Rule::literal(k, v)).collect();
    compile(&rules)
}

use tracing::{debug, debug_span};

use crate::compile::CompiledRuleSet;

use super::step::{step, MatchContext};

/// Convert `input` by applying `rules` from left to right.
///
/// Each step's output is appended in order. Every step advances by at least
/// one char, except a zero-length rewrite, whose output replaces the previous
/// step's output and which the following step is not allowed to repeat.
pub fn convert(input: &str, rules: &CompiledRuleSet) -> String {
    if input.is_empty() {
        return String::new();
    }
    let _span = debug_span!("convert", input_len = input.len()).entered();

    let mut out = String::with_capacity(input.len());
    let mut ctx = MatchContext::new();
    let mut rest = input;
    let mut last_len = 0usize;
    let mut steps = 0usize;
    while !rest.is_empty() {
        let result = step(rest, rules, &ctx);
        if result.replaces_previous {
            out.truncate(out.len() - last_len);
        }
        out.push_str(&result.output);
        last_len = result.output.len();
        rest = &rest[result.consumed_bytes..];
        ctx = result.context;
        steps += 1;
    }

    debug!(steps, output_len = out.len());
    out
}

impl CompiledRuleSet {
    /// Convert `input` with this rule set. See [`convert`].
    pub fn convert(&self, input: &str) -> String {
        convert(input, self)
    }
}

use tracing::debug;

use crate::compile::CompiledRuleSet;
use crate::rule::{Outcome, Rule, RuleAction, RuleContext};
use crate::unicode::{byte_offset, char_len};

/// State carried from one scan step to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// Trigger text of the previously applied step (original case).
    pub last_input: String,
    /// Output of the previously applied step.
    pub last_output: String,
    /// The previous step emitted without advancing; the next one must advance.
    after_rewrite: bool,
}

impl MatchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the previous step was a zero-length rewrite.
    pub fn after_rewrite(&self) -> bool {
        self.after_rewrite
    }
}

/// Result of one scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub output: String,
    /// Chars consumed from the input.
    pub consumed: usize,
    /// Context for the next step.
    pub context: MatchContext,
    /// Zero-length rewrite: `output` replaces the previous step's output
    /// instead of following it.
    pub replaces_previous: bool,
    pub(super) consumed_bytes: usize,
}

impl StepResult {
    /// The unconsumed part of `input`, which must be the text passed to
    /// [`step`].
    pub fn rest<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.consumed_bytes..).unwrap_or("")
    }
}

/// Find and apply the best rule at the start of `input`.
///
/// Candidate lengths go from the prefix-index bound down to 1; each candidate
/// is looked up exact-case first, then lowercased. Computed rules may reject
/// a candidate, which moves on to the next shorter one. With no accepted
/// rule, a single char passes through unchanged.
pub fn step(input: &str, rules: &CompiledRuleSet, ctx: &MatchContext) -> StepResult {
    let Some(first) = input.chars().next() else {
        return StepResult {
            output: String::new(),
            consumed: 0,
            context: ctx.clone(),
            replaces_previous: false,
            consumed_bytes: 0,
        };
    };

    if let Some(bound) = rules.max_key_len(first) {
        let mut trigger = &input[..byte_offset(input, bound)];
        let mut len = char_len(trigger);
        while let Some((last, _)) = trigger.char_indices().next_back() {
            if let Some(rule) = rules.lookup(trigger) {
                if let Some(result) = apply(rule, rules, input, trigger, len, ctx) {
                    return result;
                }
            }
            trigger = &trigger[..last];
            len -= 1;
        }
    }

    passthrough(first)
}

fn apply(
    rule: &Rule,
    rules: &CompiledRuleSet,
    input: &str,
    trigger: &str,
    trigger_len: usize,
    ctx: &MatchContext,
) -> Option<StepResult> {
    match rule.action() {
        RuleAction::Literal { output, length } => Some(accepted(
            input,
            trigger,
            output.clone(),
            length.unwrap_or(trigger_len),
            None,
        )),
        RuleAction::Computed {
            output: declared,
            op,
        } => {
            let rule_ctx = RuleContext {
                rules,
                input: trigger,
                remaining: &input[trigger.len()..],
                last_input: &ctx.last_input,
                last_output: &ctx.last_output,
            };
            match op.apply(&rule_ctx) {
                Outcome::Reject => None,
                Outcome::Accept { length: 0, .. } if ctx.after_rewrite => {
                    debug!(trigger, "second zero-length rewrite rejected");
                    None
                }
                Outcome::Accept {
                    output,
                    length,
                    last_output,
                } => {
                    let output = output.or_else(|| declared.clone()).unwrap_or_default();
                    Some(accepted(input, trigger, output, length, last_output))
                }
            }
        }
    }
}

fn accepted(
    input: &str,
    trigger: &str,
    output: String,
    length: usize,
    last_output: Option<String>,
) -> StepResult {
    let consumed_bytes = byte_offset(input, length);
    let consumed = char_len(&input[..consumed_bytes]);
    let context = MatchContext {
        last_input: trigger.to_string(),
        last_output: last_output.unwrap_or_else(|| output.clone()),
        after_rewrite: consumed == 0,
    };
    StepResult {
        output,
        consumed,
        context,
        replaces_previous: consumed == 0,
        consumed_bytes,
    }
}

fn passthrough(c: char) -> StepResult {
    let text = c.to_string();
    StepResult {
        output: text.clone(),
        consumed: 1,
        context: MatchContext {
            last_input: text.clone(),
            last_output: text,
            after_rewrite: false,
        },
        replaces_previous: false,
        consumed_bytes: c.len_utf8(),
    }
}

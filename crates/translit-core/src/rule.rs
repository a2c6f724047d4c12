use std::fmt;
use std::sync::Arc;

use crate::compile::CompiledRuleSet;

/// Everything a computed rule can see when it is tried at a scan position.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// The compiled rule set being applied (for nested lookups).
    pub rules: &'a CompiledRuleSet,
    /// The input text matched by the trigger, in its original case.
    pub input: &'a str,
    /// Input following the matched trigger.
    pub remaining: &'a str,
    /// Trigger text of the previously applied step.
    pub last_input: &'a str,
    /// Output of the previously applied step.
    pub last_output: &'a str,
}

/// Result of applying a computed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Apply the rule.
    ///
    /// `output: None` reuses the rule's declared output (empty if it has
    /// none). `length` is the number of chars to consume; zero emits the
    /// output in place of the previous step's output without advancing.
    /// `last_output` replaces the output recorded
    /// in the next step's context.
    Accept {
        output: Option<String>,
        length: usize,
        last_output: Option<String>,
    },
    /// Skip this candidate and try the next shorter one.
    Reject,
}

impl Outcome {
    /// Emit `output`, consuming `length` chars.
    pub fn emit(output: impl Into<String>, length: usize) -> Self {
        Outcome::Accept {
            output: Some(output.into()),
            length,
            last_output: None,
        }
    }

    /// Emit the rule's declared output, consuming `length` chars.
    pub fn declared(length: usize) -> Self {
        Outcome::Accept {
            output: None,
            length,
            last_output: None,
        }
    }

    /// Override the `last_output` seen by the next step. No-op on `Reject`.
    pub fn with_last_output(self, text: impl Into<String>) -> Self {
        match self {
            Outcome::Accept { output, length, .. } => Outcome::Accept {
                output,
                length,
                last_output: Some(text.into()),
            },
            Outcome::Reject => Outcome::Reject,
        }
    }
}

/// A rule whose output depends on the surrounding match context.
pub trait ComputeRule: Send + Sync {
    fn apply(&self, ctx: &RuleContext<'_>) -> Outcome;
}

impl<F> ComputeRule for F
where
    F: Fn(&RuleContext<'_>) -> Outcome + Send + Sync,
{
    fn apply(&self, ctx: &RuleContext<'_>) -> Outcome {
        self(ctx)
    }
}

/// What a rule does once its trigger matches.
#[derive(Clone)]
pub enum RuleAction {
    /// Fixed output; `length` overrides the consumed length (at least 1).
    Literal { output: String, length: Option<usize> },
    /// Output computed from context, optionally with a declared fallback.
    Computed {
        output: Option<String>,
        op: Arc<dyn ComputeRule>,
    },
}

impl fmt::Debug for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAction::Literal { output, length } => f
                .debug_struct("Literal")
                .field("output", output)
                .field("length", length)
                .finish(),
            RuleAction::Computed { output, .. } => f
                .debug_struct("Computed")
                .field("output", output)
                .finish_non_exhaustive(),
        }
    }
}

/// A single mapping entry: trigger key plus action.
#[derive(Debug, Clone)]
pub struct Rule {
    key: String,
    action: RuleAction,
}

impl Rule {
    pub fn literal(key: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: RuleAction::Literal {
                output: output.into(),
                length: None,
            },
        }
    }

    /// Literal rule consuming `length` chars instead of the matched key length.
    /// A zero length is raised to 1 so the scan always advances.
    pub fn literal_with_length(
        key: impl Into<String>,
        output: impl Into<String>,
        length: usize,
    ) -> Self {
        Self {
            key: key.into(),
            action: RuleAction::Literal {
                output: output.into(),
                length: Some(length.max(1)),
            },
        }
    }

    pub fn computed<F>(key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> Outcome + Send + Sync + 'static,
    {
        Self::computed_op(key, None, Arc::new(f))
    }

    /// Computed rule with a declared output, used when the operation accepts
    /// with `output: None`.
    pub fn computed_with_output<F>(key: impl Into<String>, output: impl Into<String>, f: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> Outcome + Send + Sync + 'static,
    {
        Self::computed_op(key, Some(output.into()), Arc::new(f))
    }

    /// Computed rule backed by any [`ComputeRule`] implementation.
    pub fn computed_op(
        key: impl Into<String>,
        output: Option<String>,
        op: Arc<dyn ComputeRule>,
    ) -> Self {
        Self {
            key: key.into(),
            action: RuleAction::Computed { output, op },
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn action(&self) -> &RuleAction {
        &self.action
    }

    /// The literal or declared output, if any.
    pub fn output(&self) -> Option<&str> {
        match &self.action {
            RuleAction::Literal { output, .. } => Some(output),
            RuleAction::Computed { output, .. } => output.as_deref(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.action, RuleAction::Literal { .. })
    }

    /// Same action under a different key.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: self.action.clone(),
        }
    }
}

/// Ordered rule table. Later rules override earlier ones with the same key.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate sets in increasing order of precedence.
    pub fn concat<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSet>,
    {
        let mut out = RuleSet::new();
        for set in sets {
            out.rules.extend(set.into().rules);
        }
        out
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Map every rule to zero, one or many rules, expanding in place.
    pub fn transform<F, I>(&self, mut f: F) -> RuleSet
    where
        F: FnMut(&Rule) -> I,
        I: IntoIterator<Item = Rule>,
    {
        self.rules.iter().flat_map(|r| f(r)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Rule> for RuleSet {
    fn from(rule: Rule) -> Self {
        Self { rules: vec![rule] }
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<T: IntoIterator<Item = Rule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

impl Extend<RuleSet> for RuleSet {
    fn extend<T: IntoIterator<Item = RuleSet>>(&mut self, iter: T) {
        for set in iter {
            self.rules.extend(set.rules);
        }
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

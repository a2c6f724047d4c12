//! Longest-match transliteration engine.
//!
//! A [`RuleSet`] is an ordered table of trigger → output rules. [`compile`]
//! turns it into an immutable [`CompiledRuleSet`], and [`convert`] rewrites a
//! string by repeatedly applying the longest matching rule at the current
//! position, falling back to copying one char unchanged.

pub mod compile;
pub mod config;
pub mod convert;
pub mod patterns;
pub mod rule;
pub mod unicode;

pub use compile::{compile, CompiledRuleSet};
pub use config::{parse_rules_toml, RuleTableError};
pub use convert::{convert, step, MatchContext, StepResult};
pub use rule::{ComputeRule, Outcome, Rule, RuleAction, RuleContext, RuleSet};

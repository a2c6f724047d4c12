//! Longest-match scanning over a compiled rule set.
//!
//! `step` applies the best rule at the current position given the previous
//! step's context; `convert` drives it across the whole input.

mod driver;
mod step;

#[cfg(test)]
mod tests;

pub use driver::convert;
pub use step::{step, MatchContext, StepResult};

//! Literal rule tables loaded from TOML.
//!
//! ```toml
//! [mappings]
//! ka = "か"
//! kk = { output = "っ", length = 1 }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::rule::{Rule, RuleSet};

#[derive(Deserialize)]
struct RuleTable {
    mappings: BTreeMap<String, Mapping>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Mapping {
    Output(String),
    Detailed {
        output: String,
        length: Option<usize>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("empty output for key: {0}")]
    EmptyValue(String),
    #[error("zero length for key: {0}")]
    ZeroLength(String),
}

/// Parse a `[mappings]` TOML table into literal rules, sorted by key.
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleSet, RuleTableError> {
    let table: RuleTable =
        toml::from_str(toml_str).map_err(|e| RuleTableError::Parse(e.to_string()))?;

    if table.mappings.is_empty() {
        return Err(RuleTableError::Empty);
    }

    let mut rules = RuleSet::new();
    for (key, mapping) in table.mappings {
        if key.is_empty() {
            return Err(RuleTableError::EmptyKey);
        }
        let rule = match mapping {
            Mapping::Output(output) | Mapping::Detailed { output, length: None } => {
                if output.is_empty() {
                    return Err(RuleTableError::EmptyValue(key));
                }
                Rule::literal(key, output)
            }
            Mapping::Detailed {
                output,
                length: Some(length),
            } => {
                if output.is_empty() {
                    return Err(RuleTableError::EmptyValue(key));
                }
                if length == 0 {
                    return Err(RuleTableError::ZeroLength(key));
                }
                Rule::literal_with_length(key, output, length)
            }
        };
        rules.push(rule);
    }
    Ok(rules)
}

impl RuleSet {
    /// See [`parse_rules_toml`].
    pub fn from_toml(toml_str: &str) -> Result<Self, RuleTableError> {
        parse_rules_toml(toml_str)
    }
}

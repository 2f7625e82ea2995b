//! Equivalence-class conversion configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four orientation-propagation rules used to complete a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeekRule {
    /// Avoid a new unshielded collider.
    R1,
    /// Avoid a directed cycle.
    R2,
    /// Two non-adjacent parents of `b` both joined to `a` undirected.
    R3,
    /// Chain `c -> d -> b` with `a` joined to `c` and adjacent to `d`.
    R4,
}

impl MeekRule {
    pub const ALL: [MeekRule; 4] = [Self::R1, Self::R2, Self::R3, Self::R4];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4 => "r4",
        }
    }
}

impl fmt::Display for MeekRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeekRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown rule {s:?}, expected one of r1, r2, r3, r4"))
    }
}

/// Configuration for the equivalence-class converter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConvertConfig {
    /// Rules applied when completing a pattern. Default: all four.
    pub rules: Option<Vec<MeekRule>>,
    /// Reject completions that admit no consistent DAG extension. Default: true.
    pub verify_extendable: Option<bool>,
}

impl ConvertConfig {
    /// Returns the effective rule set, deduplicated and in rule order.
    pub fn effective_rules(&self) -> Vec<MeekRule> {
        match &self.rules {
            Some(rules) => {
                let mut rules = rules.clone();
                rules.sort();
                rules.dedup();
                rules
            }
            None => MeekRule::ALL.to_vec(),
        }
    }

    pub fn rule_enabled(&self, rule: MeekRule) -> bool {
        self.rules.as_ref().map_or(true, |rules| rules.contains(&rule))
    }

    /// Returns the effective extendability check flag, defaulting to true.
    pub fn effective_verify_extendable(&self) -> bool {
        self.verify_extendable.unwrap_or(true)
    }
}

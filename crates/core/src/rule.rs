//! Keyword rules and threshold tables - the static reference data.

use serde::{Deserialize, Serialize};

/// A keyword rule: any trigger keyword found in the input selects the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Keywords, matched as substrings of the case-folded input
    pub triggers: Vec<String>,

    /// Canned response returned when the rule matches
    pub response: String,
}

impl RuleEntry {
    /// Create a rule from its trigger keywords and response.
    pub fn new<I, S>(triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }
}

/// One row of a threshold table.
///
/// For levels `value` is the minimum XP, `label` the level name and
/// `payload` its description. For streak milestones `value` is the day count,
/// `label` the title and `payload` the celebration message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Lower bound (inclusive) of this row's range
    pub value: u64,

    /// Display label
    pub label: String,

    /// Attached text
    #[serde(default)]
    pub payload: String,
}

impl Threshold {
    /// Create a threshold row.
    pub fn new(value: u64, label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            payload: payload.into(),
        }
    }
}

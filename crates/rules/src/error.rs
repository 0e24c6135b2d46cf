//! Errors raised while building rule and threshold tables.

/// Error type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Ways a table can be misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Keyword resolver built without fallback responses
    #[error("Fallback response list is empty")]
    EmptyFallback,

    /// A rule has no usable trigger keyword
    #[error("Rule {index} has no trigger keywords")]
    EmptyTriggers {
        /// Position of the rule in its list
        index: usize,
    },

    /// Threshold table built without rows
    #[error("Threshold table is empty")]
    EmptyTable,

    /// Threshold values not strictly increasing
    #[error("Threshold {value} at position {index} does not exceed the previous value {previous}")]
    Unordered {
        /// Position of the offending row
        index: usize,
        /// Value of the previous row
        previous: u64,
        /// Value of the offending row
        value: u64,
    },
}

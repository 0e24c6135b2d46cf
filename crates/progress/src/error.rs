//! Progress errors.

use comeback_core::CounterId;

/// Error type for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors raised by the aggregator and the achievement book.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// No counter registered under this id
    #[error("Unknown counter id: {0}")]
    UnknownCounter(CounterId),

    /// A counter with this id is already registered
    #[error("Counter already registered: {0}")]
    DuplicateCounter(CounterId),

    /// Counters need a positive target
    #[error("Counter {0} has a zero target")]
    ZeroTarget(CounterId),

    /// Counter carries a completion stamp but is below its target
    #[error("Counter {0} is marked complete but has not reached its target")]
    CompletedBeforeTarget(CounterId),

    /// Invalid level table
    #[error("Level table: {0}")]
    Levels(#[from] comeback_rules::RuleError),
}

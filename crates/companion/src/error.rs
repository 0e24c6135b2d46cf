//! Companion errors.

use comeback_core::{ActivityId, QuickActionId};

/// Error type for companion operations.
pub type Result<T> = std::result::Result<T, CompanionError>;

/// Errors raised by the chat companion and the mood journal.
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    /// No quick action with this id
    #[error("Unknown quick action: {0}")]
    UnknownQuickAction(QuickActionId),

    /// Activity is not among the current suggestions
    #[error("Activity {0} is not suggested for the current mood")]
    UnknownActivity(ActivityId),

    /// Activities can only be recorded against today's check-in
    #[error("No mood logged today")]
    NoCheckIn,

    /// Chat script failed validation
    #[error("Chat script: {0}")]
    Rules(#[from] comeback_rules::RuleError),

    /// Seed could not be turned into a companion
    #[error("Seed: {0}")]
    Seed(#[from] comeback_seed::SeedError),
}

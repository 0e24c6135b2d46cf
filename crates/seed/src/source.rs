//! Seed source abstraction.

use async_trait::async_trait;

use crate::data::SeedData;

/// Error type for seed operations.
pub type Result<T> = std::result::Result<T, SeedError>;

/// Errors that can occur while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tables that fail validation
    #[error("Invalid seed: {0}")]
    Invalid(#[from] comeback_rules::RuleError),

    /// Achievement marked unlocked below its target
    #[error("Achievement {0} is marked unlocked but has not reached its target")]
    UnlockedIncomplete(comeback_core::CounterId),

    /// Seed file missing
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Where the companion's reference tables come from.
///
/// This trait allows different seed sources to be plugged in.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Load and validate the seed.
    async fn load(&self) -> Result<SeedData>;
}

/// The tables the app ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

#[async_trait]
impl SeedSource for BuiltinSeed {
    async fn load(&self) -> Result<SeedData> {
        Ok(crate::builtin::seed_data())
    }
}

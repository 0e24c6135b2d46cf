//! Progress Tracking
//!
//! Bounded counters, achievements with XP and levels, and the no-contact
//! streak timer.

#![warn(missing_docs)]

pub mod error;
pub mod aggregator;
pub mod achievements;
pub mod streak;

pub use error::{ProgressError, Result};
pub use aggregator::{record_progress, ProgressAggregator, ProgressSnapshot, ProgressUpdate};
pub use achievements::{AchievementBook, AchievementUpdate};
pub use streak::{StreakTimer, StreakTick, StreakWatcher, TimeBreakdown, RECOMPUTE_PERIOD};

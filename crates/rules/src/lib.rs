//! Rule Resolution
//!
//! First-match keyword responses and threshold tables for levels,
//! milestones and message ladders.

#![warn(missing_docs)]

pub mod error;
pub mod keyword;
pub mod threshold;

pub use error::{RuleError, Result};
pub use keyword::{KeywordResolver, Resolution};
pub use threshold::{ThresholdTable, MilestoneStatus, LevelProgress};

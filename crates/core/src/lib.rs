//! Comeback core data models.
//!
//! This crate defines the data structures shared by the recovery companion:
//! keyword rules, threshold tables, bounded counters and the records each
//! feature (chat, mood journal, achievements, feed, community wall) works on.

#![warn(missing_docs)]

// Identities and time
mod id;
mod clock;

// Resolution reference data
mod rule;
mod counter;
mod event;

// Feature records
mod chat;
mod achievement;
mod mood;
mod social;
mod settings;

// Re-exports
pub use id::*;
pub use clock::{Clock, SystemClock, FixedClock};

pub use rule::{RuleEntry, Threshold};
pub use counter::Counter;
pub use event::CompletionEvent;

pub use chat::{ChatMessage, Sender, QuickAction, QuickActionKind};
pub use achievement::{Achievement, AchievementCategory};
pub use mood::{
    Mood, MoodEntry, MoodTrend, ParseMoodError, ActivitySuggestion, ActivityCategory, Difficulty,
};
pub use social::{FeedItem, FeedKind, CommunityPost, PostKind, toggle_like};
pub use settings::CompanionSettings;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

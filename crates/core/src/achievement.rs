//! Achievement model for the gamification layer.

use crate::counter::Counter;
use crate::id::CounterId;
use serde::{Deserialize, Serialize};

/// Achievement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementCategory {
    /// Staying out of contact
    NoContact,
    /// Mood tracking
    Mood,
    /// Activities completed
    Activity,
    /// Time with friends
    Social,
    /// Long-run milestones
    Milestone,
}

impl AchievementCategory {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::NoContact => "no-contact",
            AchievementCategory::Mood => "mood",
            AchievementCategory::Activity => "activity",
            AchievementCategory::Social => "social",
            AchievementCategory::Milestone => "milestone",
        }
    }
}

/// An achievement backed by a progress counter.
///
/// The achievement is unlocked exactly when its counter is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Progress toward unlocking
    pub counter: Counter,

    /// Title
    pub title: String,

    /// What it takes
    pub description: String,

    /// XP granted on unlock
    pub xp_reward: u64,

    /// Category
    pub category: AchievementCategory,
}

impl Achievement {
    /// Achievement key.
    pub fn id(&self) -> &CounterId {
        &self.counter.id
    }

    /// Whether the achievement is unlocked.
    pub fn is_unlocked(&self) -> bool {
        self.counter.is_complete()
    }
}

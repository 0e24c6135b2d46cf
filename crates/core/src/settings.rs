//! Companion settings carried in the seed document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tunables for the companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionSettings {
    /// Minimum delay before the buddy replies
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,

    /// Random extra delay added on top of the minimum (exclusive upper bound)
    #[serde(default = "default_reply_delay_jitter_ms")]
    pub reply_delay_jitter_ms: u64,

    /// How many mood entries the journal keeps
    #[serde(default = "default_mood_history_limit")]
    pub mood_history_limit: usize,

    /// Day the no-contact streak started
    #[serde(default = "default_streak_start")]
    pub streak_start: NaiveDate,

    /// XP the achievement book starts with
    #[serde(default = "default_starting_xp")]
    pub starting_xp: u64,
}

fn default_reply_delay_min_ms() -> u64 {
    1500
}

fn default_reply_delay_jitter_ms() -> u64 {
    1000
}

fn default_mood_history_limit() -> usize {
    7
}

fn default_streak_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 15).unwrap_or_default()
}

fn default_starting_xp() -> u64 {
    350
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_jitter_ms: default_reply_delay_jitter_ms(),
            mood_history_limit: default_mood_history_limit(),
            streak_start: default_streak_start(),
            starting_xp: default_starting_xp(),
        }
    }
}

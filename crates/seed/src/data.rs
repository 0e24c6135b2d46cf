//! Seed document model.
//!
//! Timestamps in the seed are relative ("3 days ago") so the same document
//! works at any date; `*_at(now)` helpers turn them into concrete records.

use chrono::{Duration, NaiveTime};
use comeback_core::{
    Achievement, AchievementCategory, ActivitySuggestion, CommunityPost, CompanionSettings,
    Counter, CounterId, FeedItem, Mood, MoodEntry, PostId, PostKind, QuickAction, RuleEntry,
    Threshold, Time,
};
use comeback_rules::{KeywordResolver, ThresholdTable};
use serde::{Deserialize, Serialize};

use crate::source::{Result, SeedError};

/// Everything the companion needs at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// Tunables
    #[serde(default)]
    pub settings: CompanionSettings,

    /// Chat companion script
    pub chat: ChatSeed,

    /// XP levels
    pub levels: Vec<Threshold>,

    /// Streak milestones in days
    pub milestones: Vec<Threshold>,

    /// Motivational line per streak length
    pub streak_messages: Vec<Threshold>,

    /// Achievements and their starting progress
    pub achievements: Vec<AchievementSeed>,

    /// Mood suggestions and starting history
    pub moods: MoodSeed,

    /// Healing feed cards
    pub feed: Vec<FeedItem>,

    /// Community wall pools and starting posts
    pub community: CommunitySeed,
}

/// Chat companion script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSeed {
    /// Opening line from the buddy
    pub greeting: String,

    /// Keyword rules, first match wins
    pub rules: Vec<RuleEntry>,

    /// Replies used when no rule matches
    pub fallback: Vec<String>,

    /// Quick action buttons
    pub quick_actions: Vec<QuickAction>,
}

/// An achievement as written in the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSeed {
    /// Achievement key
    pub id: CounterId,
    /// Title
    pub title: String,
    /// What it takes
    pub description: String,
    /// XP granted on unlock
    pub xp_reward: u64,
    /// Category
    pub category: AchievementCategory,
    /// Starting progress
    pub progress: u32,
    /// Progress needed
    pub target: u32,
    /// For achievements already unlocked: how long ago
    #[serde(default)]
    pub unlocked_days_ago: Option<i64>,
}

/// Suggestions offered for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSuggestions {
    /// Mood they apply to
    pub mood: Mood,
    /// Suggested activities
    pub activities: Vec<ActivitySuggestion>,
}

/// A past mood check-in as written in the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodHistorySeed {
    /// Logged mood
    pub mood: Mood,
    /// How many days before now
    pub days_ago: i64,
    /// Activities done that day
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Mood journal seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSeed {
    /// Suggestions per mood
    pub suggestions: Vec<MoodSuggestions>,
    /// Starting history, newest first
    #[serde(default)]
    pub history: Vec<MoodHistorySeed>,
}

/// A community post as written in the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSeed {
    /// Anonymous handle
    pub author: String,
    /// Avatar color token
    pub avatar: String,
    /// Post body
    pub content: String,
    /// Post kind
    pub kind: PostKind,
    /// Like count
    pub likes: u32,
    /// Comment count
    pub comments: u32,
    /// Whether the user liked it
    #[serde(default)]
    pub liked: bool,
    /// How many minutes before now
    pub minutes_ago: i64,
    /// Author's shared streak
    #[serde(default)]
    pub streak: Option<u32>,
    /// Author's shared level
    #[serde(default)]
    pub level: Option<String>,
}

/// Community wall seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunitySeed {
    /// Handles drawn for new posts
    pub anonymous_names: Vec<String>,
    /// Avatar colors drawn for new posts
    pub avatars: Vec<String>,
    /// Starting posts, newest first
    #[serde(default)]
    pub posts: Vec<PostSeed>,
}

impl SeedData {
    /// Check that every table can be built.
    pub fn validate(&self) -> Result<()> {
        self.keyword_resolver()?;
        self.level_table()?;
        self.milestone_table()?;
        self.message_table()?;
        if let Some(seed) = self
            .achievements
            .iter()
            .find(|a| a.unlocked_days_ago.is_some() && a.progress < a.target)
        {
            return Err(SeedError::UnlockedIncomplete(seed.id.clone()));
        }
        Ok(())
    }

    /// Keyword resolver for the chat script.
    pub fn keyword_resolver(&self) -> Result<KeywordResolver> {
        Ok(KeywordResolver::new(self.chat.rules.clone(), self.chat.fallback.clone())?)
    }

    /// XP level table.
    pub fn level_table(&self) -> Result<ThresholdTable> {
        Ok(ThresholdTable::new(self.levels.clone())?)
    }

    /// Streak milestone table.
    pub fn milestone_table(&self) -> Result<ThresholdTable> {
        Ok(ThresholdTable::new(self.milestones.clone())?)
    }

    /// Streak message ladder.
    pub fn message_table(&self) -> Result<ThresholdTable> {
        Ok(ThresholdTable::new(self.streak_messages.clone())?)
    }

    /// Streak start as an instant (midnight UTC of the configured day).
    pub fn streak_start(&self) -> Time {
        self.settings.streak_start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Achievements with unlock times resolved against `now`.
    pub fn achievements_at(&self, now: Time) -> Vec<Achievement> {
        self.achievements
            .iter()
            .map(|seed| {
                let mut counter = Counter::new(seed.id.clone(), seed.progress, seed.target);
                if counter.is_complete() {
                    counter.completed_at =
                        seed.unlocked_days_ago.map(|days| now - Duration::days(days));
                }
                Achievement {
                    counter,
                    title: seed.title.clone(),
                    description: seed.description.clone(),
                    xp_reward: seed.xp_reward,
                    category: seed.category,
                }
            })
            .collect()
    }

    /// Starting mood history resolved against `now`, newest first.
    pub fn mood_history_at(&self, now: Time) -> Vec<MoodEntry> {
        self.moods
            .history
            .iter()
            .map(|seed| {
                let mut entry = MoodEntry::new(seed.mood, now - Duration::days(seed.days_ago));
                entry.activities = seed.activities.clone();
                entry
            })
            .collect()
    }

    /// Starting community posts resolved against `now`, newest first.
    pub fn posts_at(&self, now: Time) -> Vec<CommunityPost> {
        self.community
            .posts
            .iter()
            .map(|seed| CommunityPost {
                id: PostId::new(),
                author: seed.author.clone(),
                avatar: seed.avatar.clone(),
                content: seed.content.clone(),
                kind: seed.kind,
                likes: seed.likes,
                comments: seed.comments,
                liked: seed.liked,
                timestamp: now - Duration::minutes(seed.minutes_ago),
                streak: seed.streak,
                level: seed.level.clone(),
            })
            .collect()
    }

    /// Suggestions configured for `mood`.
    pub fn suggestions_for(&self, mood: Mood) -> &[ActivitySuggestion] {
        self.moods
            .suggestions
            .iter()
            .find(|s| s.mood == mood)
            .map(|s| s.activities.as_slice())
            .unwrap_or(&[])
    }
}

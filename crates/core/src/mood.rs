//! Mood journal model.

use crate::id::{ActivityId, EntryId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// A mood on the five-point check-in scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 1
    Terrible,
    /// 2
    Sad,
    /// 3
    Okay,
    /// 4
    Good,
    /// 5
    Amazing,
}

impl Mood {
    /// Every mood, worst first.
    pub const ALL: [Mood; 5] = [Mood::Terrible, Mood::Sad, Mood::Okay, Mood::Good, Mood::Amazing];

    /// Score used for trend analysis (1-5).
    pub fn score(&self) -> u8 {
        match self {
            Mood::Terrible => 1,
            Mood::Sad => 2,
            Mood::Okay => 3,
            Mood::Good => 4,
            Mood::Amazing => 5,
        }
    }

    /// Emoji shown for the mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Terrible => "😢",
            Mood::Sad => "😔",
            Mood::Okay => "😐",
            Mood::Good => "😊",
            Mood::Amazing => "🔥",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Terrible => "Terrible",
            Mood::Sad => "Sad",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Amazing => "Amazing",
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Terrible => "terrible",
            Mood::Sad => "sad",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Amazing => "amazing",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a mood name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood: {0}")]
pub struct ParseMoodError(pub String);

impl std::str::FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terrible" => Ok(Mood::Terrible),
            "sad" => Ok(Mood::Sad),
            "okay" => Ok(Mood::Okay),
            "good" => Ok(Mood::Good),
            "amazing" => Ok(Mood::Amazing),
            _ => Err(ParseMoodError(s.to_string())),
        }
    }
}

/// One mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Logged mood
    pub mood: Mood,

    /// When it was logged
    pub timestamp: Time,

    /// Activities done that day
    #[serde(default)]
    pub activities: Vec<String>,
}

impl MoodEntry {
    /// Create an entry with no activities.
    pub fn new(mood: Mood, timestamp: Time) -> Self {
        Self {
            id: EntryId::new(),
            mood,
            timestamp,
            activities: Vec::new(),
        }
    }
}

/// Activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Movement and exercise
    Physical,
    /// Reflection and learning
    Mental,
    /// Time with people
    Social,
    /// Making something
    Creative,
}

/// How hard an activity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Low effort
    Easy,
    /// Some effort
    Medium,
    /// Full effort
    Hard,
}

/// An activity suggested for a mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySuggestion {
    /// Activity key
    pub id: ActivityId,

    /// Title
    pub title: String,

    /// Short pitch
    pub description: String,

    /// Category
    pub category: ActivityCategory,

    /// Rough duration, e.g. "15-30 min"
    pub duration: String,

    /// Difficulty
    pub difficulty: Difficulty,
}

/// Direction of recent moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    /// Not enough data
    Neutral,
    /// Recent average at least 4
    Improving,
    /// Recent average at most 2.5
    Declining,
    /// Anything in between
    Stable,
}

impl MoodTrend {
    /// Message shown alongside the trend.
    pub fn message(&self) -> &'static str {
        match self {
            MoodTrend::Improving => "You're on an upward trajectory! Keep it up, King!",
            MoodTrend::Declining => "Rough patch? That's normal. You've got this.",
            MoodTrend::Stable => "Steady progress. Consistency is key.",
            MoodTrend::Neutral => "Track your mood to see patterns.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_is_case_insensitive() {
        assert_eq!("Amazing".parse::<Mood>().unwrap(), Mood::Amazing);
        assert_eq!(" sad ".parse::<Mood>().unwrap(), Mood::Sad);
        assert!("meh".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_scores_follow_scale() {
        let scores: Vec<u8> = Mood::ALL.iter().map(Mood::score).collect();
        assert_eq!(scores, vec![1, 2, 3, 4, 5]);
    }
}

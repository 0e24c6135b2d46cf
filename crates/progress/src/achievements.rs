//! Achievements, XP and levels.

use std::sync::Arc;

use comeback_core::{Achievement, Clock, CounterId, Threshold};
use comeback_rules::{LevelProgress, ThresholdTable};
use tracing::info;

use crate::aggregator::ProgressAggregator;
use crate::error::{ProgressError, Result};

/// Result of recording progress toward an achievement.
#[derive(Debug, Clone)]
pub struct AchievementUpdate {
    /// Achievement state after the update
    pub achievement: Achievement,

    /// True only on the update that unlocked it
    pub unlocked: bool,

    /// XP granted by this update
    pub xp_awarded: u64,

    /// New level, when the XP grant crossed into one
    pub level_up: Option<Threshold>,
}

/// The gamification ledger: achievements, total XP and the level table.
pub struct AchievementBook {
    achievements: Vec<Achievement>,
    progress: ProgressAggregator,
    levels: ThresholdTable,
    xp: u64,
}

impl AchievementBook {
    /// Build a book from seeded achievements.
    ///
    /// Achievements that start unlocked are assumed to be already reflected
    /// in `starting_xp`.
    pub fn new(
        achievements: Vec<Achievement>,
        levels: ThresholdTable,
        starting_xp: u64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let mut progress = ProgressAggregator::new(clock);
        let mut registered = Vec::with_capacity(achievements.len());
        for mut achievement in achievements {
            progress.register(achievement.counter.clone())?;
            if let Some(counter) = progress.get(achievement.id()) {
                achievement.counter = counter.clone();
            }
            registered.push(achievement);
        }

        Ok(Self {
            achievements: registered,
            progress,
            levels,
            xp: starting_xp,
        })
    }

    /// Total XP.
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// The level table.
    pub fn levels(&self) -> &ThresholdTable {
        &self.levels
    }

    /// Current level.
    pub fn level(&self) -> &Threshold {
        self.levels.resolve_level(self.xp)
    }

    /// Current level, next level and progress between them.
    pub fn level_status(&self) -> LevelProgress<'_> {
        self.levels.level_progress(self.xp)
    }

    /// All achievements in seed order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Look up one achievement.
    pub fn get(&self, id: &CounterId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id() == id)
    }

    /// Unlocked achievements.
    pub fn unlocked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.is_unlocked()).collect()
    }

    /// Achievements still in progress.
    pub fn locked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| !a.is_unlocked()).collect()
    }

    /// Grant XP directly. Returns the new level if one was reached.
    pub fn award_xp(&mut self, amount: u64) -> Option<Threshold> {
        let before = self.level().clone();
        self.xp = self.xp.saturating_add(amount);
        let after = self.level();
        if *after != before {
            info!("Level up: {} -> {} ({} XP)", before.label, after.label, self.xp);
            Some(after.clone())
        } else {
            None
        }
    }

    /// Record progress toward an achievement.
    ///
    /// The XP reward is granted on the single update that unlocks it.
    pub fn record(&mut self, id: &CounterId, delta: i64) -> Result<AchievementUpdate> {
        let update = self.progress.record_progress(id, delta)?;

        let index = self
            .achievements
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| ProgressError::UnknownCounter(id.clone()))?;
        self.achievements[index].counter = update.counter;

        let unlocked = update.completion.is_some();
        let (xp_awarded, level_up) = if unlocked {
            let reward = self.achievements[index].xp_reward;
            info!("Achievement unlocked: {} (+{} XP)", self.achievements[index].title, reward);
            (reward, self.award_xp(reward))
        } else {
            (0, None)
        };

        Ok(AchievementUpdate {
            achievement: self.achievements[index].clone(),
            unlocked,
            xp_awarded,
            level_up,
        })
    }

    /// Drive an achievement straight to its target.
    pub fn unlock(&mut self, id: &CounterId) -> Result<AchievementUpdate> {
        let remaining = self
            .get(id)
            .map(|a| a.counter.target.saturating_sub(a.counter.current))
            .ok_or_else(|| ProgressError::UnknownCounter(id.clone()))?;
        self.record(id, remaining as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use comeback_core::{AchievementCategory, Counter, FixedClock};

    fn achievement(id: &str, current: u32, target: u32, xp: u64) -> Achievement {
        Achievement {
            counter: Counter::new(id, current, target),
            title: id.to_string(),
            description: String::new(),
            xp_reward: xp,
            category: AchievementCategory::Activity,
        }
    }

    fn book(starting_xp: u64) -> AchievementBook {
        let levels = ThresholdTable::new(vec![
            Threshold::new(0, "Sad Boy", ""),
            Threshold::new(100, "Healing Warrior", ""),
            Threshold::new(300, "Healing King", ""),
            Threshold::new(600, "Unstoppable", ""),
        ])
        .unwrap();
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()));
        AchievementBook::new(
            vec![
                achievement("first-day", 1, 1, 25),
                achievement("gym-beast", 7, 10, 60),
                achievement("social-butterfly", 2, 5, 55),
            ],
            levels,
            starting_xp,
            clock,
        )
        .unwrap()
    }

    #[test]
    fn test_seed_split_into_unlocked_and_locked() {
        let book = book(350);
        assert_eq!(book.unlocked().len(), 1);
        assert_eq!(book.locked().len(), 2);
        assert_eq!(book.level().label, "Healing King");
    }

    #[test]
    fn test_reward_granted_once() {
        let mut book = book(350);
        let id = CounterId::new("gym-beast");

        let update = book.record(&id, 2).unwrap();
        assert!(!update.unlocked);
        assert_eq!(book.xp(), 350);

        let update = book.record(&id, 1).unwrap();
        assert!(update.unlocked);
        assert_eq!(update.xp_awarded, 60);
        assert_eq!(book.xp(), 410);

        let update = book.record(&id, 5).unwrap();
        assert!(!update.unlocked);
        assert_eq!(update.xp_awarded, 0);
        assert_eq!(book.xp(), 410);
        assert!(book.get(&id).unwrap().is_unlocked());
    }

    #[test]
    fn test_unlock_reports_level_up() {
        let mut book = book(270);
        let update = book.unlock(&CounterId::new("gym-beast")).unwrap();
        assert!(update.unlocked);
        assert_eq!(update.level_up.unwrap().label, "Healing King");
        assert_eq!(book.xp(), 330);
    }

    #[test]
    fn test_unlock_already_unlocked_is_silent() {
        let mut book = book(350);
        let update = book.unlock(&CounterId::new("first-day")).unwrap();
        assert!(!update.unlocked);
        assert_eq!(book.xp(), 350);
    }

    #[test]
    fn test_level_status_tracks_xp() {
        let mut book = book(590);
        assert_eq!(book.level_status().remaining, 10);
        assert!(book.award_xp(10).is_some());
        let status = book.level_status();
        assert_eq!(status.current.label, "Unstoppable");
        assert!(status.next.is_none());
        assert_eq!(status.percent, 100.0);
    }

    #[test]
    fn test_stamped_incomplete_achievement_rejected() {
        let levels = ThresholdTable::new(vec![Threshold::new(0, "Sad Boy", "")]).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let mut gym = achievement("gym-beast", 7, 10, 60);
        gym.counter.completed_at = Some(at);

        let result = AchievementBook::new(vec![gym], levels, 0, Arc::new(FixedClock::new(at)));
        assert!(matches!(result, Err(ProgressError::CompletedBeforeTarget(_))));
    }

    #[test]
    fn test_unknown_achievement() {
        let mut book = book(0);
        assert!(matches!(
            book.record(&CounterId::new("ghost"), 1),
            Err(ProgressError::UnknownCounter(_))
        ));
        assert!(book.unlock(&CounterId::new("ghost")).is_err());
    }
}

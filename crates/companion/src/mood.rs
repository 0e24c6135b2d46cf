//! Mood journal: daily check-ins, trend and activity suggestions.

use std::collections::HashMap;
use std::sync::Arc;

use comeback_core::{ActivityId, ActivitySuggestion, Clock, Mood, MoodEntry, MoodTrend};
use comeback_seed::SeedData;
use tracing::{debug, info, warn};

use crate::error::{CompanionError, Result};

/// Entries averaged for the trend.
const TREND_WINDOW: usize = 3;

/// Mood check-ins, newest first.
pub struct MoodJournal {
    history: Vec<MoodEntry>,
    limit: usize,
    current: Option<Mood>,
    suggestions: HashMap<Mood, Vec<ActivitySuggestion>>,
    clock: Arc<dyn Clock>,
}

impl MoodJournal {
    /// Empty journal keeping at most `limit` entries.
    pub fn new(
        limit: usize,
        suggestions: HashMap<Mood, Vec<ActivitySuggestion>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            history: Vec::new(),
            limit: limit.max(1),
            current: None,
            suggestions,
            clock,
        }
    }

    /// Journal with the seed's suggestions and starting history.
    pub fn from_seed(seed: &SeedData, clock: Arc<dyn Clock>) -> Self {
        let suggestions = seed
            .moods
            .suggestions
            .iter()
            .map(|s| (s.mood, s.activities.clone()))
            .collect();
        let mut journal = Self::new(seed.settings.mood_history_limit, suggestions, clock);
        journal.history = seed.mood_history_at(journal.clock.now());
        journal.history.truncate(journal.limit);
        journal
    }

    /// Entries, newest first.
    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    /// Record a check-in for now.
    pub fn log(&mut self, mood: Mood) -> &MoodEntry {
        let entry = MoodEntry::new(mood, self.clock.now());
        info!("Mood logged: {} {}", mood.emoji(), mood.label());
        self.history.insert(0, entry);
        self.history.truncate(self.limit);
        self.current = Some(mood);
        &self.history[0]
    }

    /// Today's check-in, by UTC date.
    pub fn today(&self) -> Option<&MoodEntry> {
        let today = self.clock.now().date_naive();
        self.history.iter().find(|e| e.timestamp.date_naive() == today)
    }

    fn today_mut(&mut self) -> Option<&mut MoodEntry> {
        let today = self.clock.now().date_naive();
        self.history.iter_mut().find(|e| e.timestamp.date_naive() == today)
    }

    /// Drop today's check-in so it can be logged again.
    pub fn clear_today(&mut self) -> Option<MoodEntry> {
        let today = self.clock.now().date_naive();
        let index = self
            .history
            .iter()
            .position(|e| e.timestamp.date_naive() == today)?;
        self.current = None;
        Some(self.history.remove(index))
    }

    /// Mood driving suggestions: the last one logged, else today's.
    pub fn active_mood(&self) -> Option<Mood> {
        self.current.or_else(|| self.today().map(|e| e.mood))
    }

    /// Trend over the most recent check-ins.
    pub fn trend(&self) -> MoodTrend {
        if self.history.len() < 2 {
            return MoodTrend::Neutral;
        }

        let recent = &self.history[..self.history.len().min(TREND_WINDOW)];
        let total: u32 = recent.iter().map(|e| u32::from(e.mood.score())).sum();
        let average = f64::from(total) / recent.len() as f64;
        debug!("Mood average over {} entries: {:.2}", recent.len(), average);

        if average >= 4.0 {
            MoodTrend::Improving
        } else if average <= 2.5 {
            MoodTrend::Declining
        } else {
            MoodTrend::Stable
        }
    }

    /// Suggestions configured for `mood`.
    pub fn suggestions_for(&self, mood: Mood) -> &[ActivitySuggestion] {
        self.suggestions.get(&mood).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Suggestions for the active mood; empty before any check-in.
    pub fn suggestions(&self) -> &[ActivitySuggestion] {
        match self.active_mood() {
            Some(mood) => self.suggestions_for(mood),
            None => &[],
        }
    }

    /// Mark a suggested activity done on today's check-in.
    pub fn complete_activity(&mut self, id: &ActivityId) -> Result<ActivitySuggestion> {
        let activity = self
            .suggestions()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| {
                warn!("Activity {} is not suggested for the current mood", id);
                CompanionError::UnknownActivity(id.clone())
            })?;

        let entry = self.today_mut().ok_or(CompanionError::NoCheckIn)?;
        if !entry.activities.iter().any(|a| a == id.as_str()) {
            entry.activities.push(id.as_str().to_string());
        }
        info!("Activity completed: {}", activity.title);
        Ok(activity)
    }
}

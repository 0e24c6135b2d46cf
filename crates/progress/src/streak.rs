//! No-contact streak timer.
//!
//! Counts whole days since the streak started, lists milestones reached and
//! picks the motivational line for the current day count. A background watcher
//! recomputes the streak on a fixed period (hourly by default).

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use comeback_core::{Clock, Threshold, Time};
use comeback_rules::{MilestoneStatus, ThresholdTable};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How often the watcher recomputes the streak.
pub const RECOMPUTE_PERIOD: Duration = Duration::from_secs(60 * 60);

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Streak length in other units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBreakdown {
    /// Whole days
    pub days: u64,
    /// `days * 24`
    pub total_hours: u64,
    /// `total_hours * 60`
    pub total_minutes: u64,
    /// Whole weeks
    pub weeks: u64,
    /// Days past the last whole week
    pub remaining_days: u64,
}

impl TimeBreakdown {
    /// Break a day count down.
    pub fn from_days(days: u64) -> Self {
        let total_hours = days * 24;
        Self {
            days,
            total_hours,
            total_minutes: total_hours * 60,
            weeks: days / 7,
            remaining_days: days % 7,
        }
    }
}

/// One recomputation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakTick {
    /// Streak breakdown at this tick
    pub breakdown: TimeBreakdown,
    /// Milestone to celebrate, the first time its day is reached
    pub celebration: Option<Threshold>,
}

/// Day counter with milestone and message tables.
pub struct StreakTimer {
    start: Time,
    clock: Arc<dyn Clock>,
    milestones: ThresholdTable,
    messages: ThresholdTable,
    celebrated: HashSet<u64>,
}

impl StreakTimer {
    /// Create a timer.
    ///
    /// `milestones` is read membership-gated (day counts reached);
    /// `messages` is read floor-clamped, its rows carrying the line in
    /// `payload`.
    pub fn new(
        start: Time,
        clock: Arc<dyn Clock>,
        milestones: ThresholdTable,
        messages: ThresholdTable,
    ) -> Self {
        Self {
            start,
            clock,
            milestones,
            messages,
            celebrated: HashSet::new(),
        }
    }

    /// When the streak started.
    pub fn start(&self) -> Time {
        self.start
    }

    /// Whole days between the start and now.
    pub fn elapsed_days(&self) -> u64 {
        let seconds = (self.clock.now() - self.start).num_seconds().unsigned_abs();
        seconds / SECONDS_PER_DAY as u64
    }

    /// The streak in hours, minutes and weeks.
    pub fn breakdown(&self) -> TimeBreakdown {
        TimeBreakdown::from_days(self.elapsed_days())
    }

    /// Every milestone with its achieved flag.
    pub fn milestones(&self) -> Vec<MilestoneStatus<'_>> {
        self.milestones.milestones(self.elapsed_days())
    }

    /// Highest milestone reached, if any.
    pub fn latest_milestone(&self) -> Option<&Threshold> {
        self.milestones.highest_achieved(self.elapsed_days())
    }

    /// Next milestone ahead.
    pub fn next_milestone(&self) -> Option<&Threshold> {
        self.milestones.next_after(self.elapsed_days())
    }

    /// Motivational line for the current day count.
    pub fn motivation(&self) -> &str {
        &self.messages.resolve_level(self.elapsed_days()).payload
    }

    /// The milestone landing exactly on today, once per milestone.
    pub fn take_celebration(&mut self) -> Option<Threshold> {
        let days = self.elapsed_days();
        let milestone = self.milestones.exact(days)?;
        if !self.celebrated.insert(days) {
            return None;
        }
        info!("Milestone reached: {} ({} days)", milestone.label, days);
        Some(milestone.clone())
    }

    /// Recompute the streak.
    pub fn tick(&mut self) -> StreakTick {
        let breakdown = self.breakdown();
        debug!("Streak recomputed: {} days", breakdown.days);
        StreakTick {
            breakdown,
            celebration: self.take_celebration(),
        }
    }

    /// Restart the streak from now.
    pub fn reset(&mut self) {
        self.start = self.clock.now();
        self.celebrated.clear();
        info!("Streak reset at {}", self.start);
    }
}

/// Background task recomputing a streak on a fixed period.
///
/// The task stops when the watcher is dropped or the receiver goes away.
pub struct StreakWatcher {
    handle: JoinHandle<()>,
}

impl StreakWatcher {
    /// Spawn the watcher. The first tick is delivered immediately.
    pub fn spawn(mut timer: StreakTimer, period: Duration) -> (Self, mpsc::Receiver<StreakTick>) {
        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if tx.send(timer.tick()).await.is_err() {
                    debug!("Streak receiver closed, stopping watcher");
                    break;
                }
            }
        });
        (Self { handle }, rx)
    }

    /// Stop the watcher.
    pub fn stop(self) {
        // Drop aborts the task.
    }
}

impl Drop for StreakWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

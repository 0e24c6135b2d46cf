//! Bounded progress counters.

use crate::id::CounterId;
use crate::Time;
use serde::{Deserialize, Serialize};

/// A progress value bounded by a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Counter key
    pub id: CounterId,

    /// Current value, kept within `[0, target]`
    pub current: u32,

    /// Value at which the counter is complete
    pub target: u32,

    /// When the counter first became complete; set once, never cleared
    #[serde(default)]
    pub completed_at: Option<Time>,
}

impl Counter {
    /// Create a counter. `current` is clamped to `target`.
    pub fn new(id: impl Into<CounterId>, current: u32, target: u32) -> Self {
        Self {
            id: id.into(),
            current: current.min(target),
            target,
            completed_at: None,
        }
    }

    /// Completion ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (self.current as f64 / self.target as f64).clamp(0.0, 1.0)
    }

    /// Whether the counter has reached its target.
    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_completion() {
        let counter = Counter::new("gym-beast", 7, 10);
        assert!((counter.ratio() - 0.7).abs() < f64::EPSILON);
        assert!(!counter.is_complete());

        let done = Counter::new("first-day", 1, 1);
        assert_eq!(done.ratio(), 1.0);
        assert!(done.is_complete());
    }

    #[test]
    fn test_new_clamps_initial_value() {
        let counter = Counter::new("month-master", 45, 30);
        assert_eq!(counter.current, 30);
        assert_eq!(counter.ratio(), 1.0);
    }
}

//! Threshold tables.
//!
//! A table is a list of rows sorted by strictly increasing `value`. Row `i`
//! covers `[value_i, value_{i+1})` and the last row is open-ended. Two lookup
//! policies are offered and kept separate:
//!
//! - level resolution is floor-clamped: a counter below the first row still
//!   resolves to the first row;
//! - milestone resolution is membership-gated: a row is achieved only when the
//!   counter has reached its value, so a low counter achieves nothing.

use comeback_core::Threshold;
use serde::Serialize;

use crate::error::{Result, RuleError};

/// A milestone row together with whether the counter has reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneStatus<'a> {
    /// The milestone
    pub threshold: &'a Threshold,
    /// `counter >= threshold.value`
    pub achieved: bool,
}

/// Where a counter stands within the level table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress<'a> {
    /// Resolved level
    pub current: &'a Threshold,
    /// Level after it, `None` at the top
    pub next: Option<&'a Threshold>,
    /// Percent of the way from `current` to `next` (100 at the top)
    pub percent: f64,
    /// Counter units still needed for `next` (0 at the top)
    pub remaining: u64,
}

/// Validated, ascending threshold table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    rows: Vec<Threshold>,
}

impl ThresholdTable {
    /// Build a table, rejecting empty or non-increasing input.
    pub fn new(rows: Vec<Threshold>) -> Result<Self> {
        if rows.is_empty() {
            return Err(RuleError::EmptyTable);
        }
        for (index, pair) in rows.windows(2).enumerate() {
            if pair[1].value <= pair[0].value {
                return Err(RuleError::Unordered {
                    index: index + 1,
                    previous: pair[0].value,
                    value: pair[1].value,
                });
            }
        }
        Ok(Self { rows })
    }

    /// All rows, ascending.
    pub fn rows(&self) -> &[Threshold] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; tables are validated non-empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the last row whose value is `<= counter`.
    fn position(&self, counter: u64) -> Option<usize> {
        self.rows.iter().rposition(|row| row.value <= counter)
    }

    /// Floor-clamped lookup: the row whose range contains `counter`, or the
    /// first row when `counter` is below every value.
    pub fn resolve_level(&self, counter: u64) -> &Threshold {
        &self.rows[self.position(counter).unwrap_or(0)]
    }

    /// Row after the resolved level, if any.
    pub fn next_level(&self, counter: u64) -> Option<&Threshold> {
        self.rows.get(self.position(counter).unwrap_or(0) + 1)
    }

    /// Full level standing for `counter`.
    pub fn level_progress(&self, counter: u64) -> LevelProgress<'_> {
        let current = self.resolve_level(counter);
        let next = self.next_level(counter);

        let (percent, remaining) = match next {
            None => (100.0, 0),
            Some(next) => {
                let span = (next.value - current.value) as f64;
                let into = counter.saturating_sub(current.value) as f64;
                ((into / span * 100.0).clamp(0.0, 100.0), next.value.saturating_sub(counter))
            }
        };

        LevelProgress {
            current,
            next,
            percent,
            remaining,
        }
    }

    /// Membership-gated lookup: the highest row reached, or `None` when the
    /// counter is below the first value.
    pub fn highest_achieved(&self, counter: u64) -> Option<&Threshold> {
        self.position(counter).map(|i| &self.rows[i])
    }

    /// First row not yet reached.
    pub fn next_after(&self, counter: u64) -> Option<&Threshold> {
        self.rows.iter().find(|row| row.value > counter)
    }

    /// Every row with its achieved flag.
    pub fn milestones(&self, counter: u64) -> Vec<MilestoneStatus<'_>> {
        self.rows
            .iter()
            .map(|threshold| MilestoneStatus {
                threshold,
                achieved: counter >= threshold.value,
            })
            .collect()
    }

    /// The row whose value equals `counter` exactly.
    pub fn exact(&self, counter: u64) -> Option<&Threshold> {
        self.rows
            .binary_search_by_key(&counter, |row| row.value)
            .ok()
            .map(|i| &self.rows[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> ThresholdTable {
        ThresholdTable::new(vec![
            Threshold::new(0, "Sad Boy", ""),
            Threshold::new(100, "Healing Warrior", ""),
            Threshold::new(300, "Healing King", ""),
            Threshold::new(600, "Unstoppable", ""),
        ])
        .unwrap()
    }

    fn milestones() -> ThresholdTable {
        ThresholdTable::new(vec![
            Threshold::new(1, "First Day", ""),
            Threshold::new(3, "3 Day Warrior", ""),
            Threshold::new(7, "Week Champion", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_level_examples() {
        let table = levels();
        assert_eq!(table.resolve_level(350).label, "Healing King");
        assert_eq!(table.resolve_level(1000).label, "Unstoppable");
    }

    #[test]
    fn test_level_range_boundaries() {
        let table = levels();
        assert_eq!(table.resolve_level(0).label, "Sad Boy");
        assert_eq!(table.resolve_level(99).label, "Sad Boy");
        assert_eq!(table.resolve_level(100).label, "Healing Warrior");
        assert_eq!(table.resolve_level(299).label, "Healing Warrior");
        assert_eq!(table.resolve_level(600).label, "Unstoppable");
        assert_eq!(table.resolve_level(u64::MAX).label, "Unstoppable");
    }

    #[test]
    fn test_resolved_level_is_unique_containing_range() {
        let table = levels();
        let rows = table.rows();
        for counter in 0..800u64 {
            let level = table.resolve_level(counter);
            let i = rows.iter().position(|r| r == level).unwrap();
            assert!(level.value <= counter);
            if let Some(next) = rows.get(i + 1) {
                assert!(counter < next.value);
            }
        }
    }

    #[test]
    fn test_level_floor_clamps_below_first() {
        let table = milestones();
        assert_eq!(table.resolve_level(0).label, "First Day");
    }

    #[test]
    fn test_milestone_membership_is_gated() {
        let table = milestones();
        assert!(table.highest_achieved(0).is_none());
        assert_eq!(table.highest_achieved(1).unwrap().label, "First Day");
        assert_eq!(table.highest_achieved(5).unwrap().label, "3 Day Warrior");

        let flags: Vec<bool> = table.milestones(3).iter().map(|m| m.achieved).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_exact_and_next_after() {
        let table = milestones();
        assert_eq!(table.exact(7).unwrap().label, "Week Champion");
        assert!(table.exact(6).is_none());
        assert_eq!(table.next_after(3).unwrap().label, "Week Champion");
        assert!(table.next_after(7).is_none());
    }

    #[test]
    fn test_level_progress() {
        let table = levels();
        let progress = table.level_progress(350);
        assert_eq!(progress.current.label, "Healing King");
        assert_eq!(progress.next.unwrap().label, "Unstoppable");
        assert_eq!(progress.remaining, 250);
        assert!((progress.percent - 50.0 / 3.0).abs() < 1e-9);

        let top = table.level_progress(5000);
        assert!(top.next.is_none());
        assert_eq!(top.percent, 100.0);
        assert_eq!(top.remaining, 0);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(ThresholdTable::new(vec![]).unwrap_err(), RuleError::EmptyTable);

        let err = ThresholdTable::new(vec![
            Threshold::new(0, "a", ""),
            Threshold::new(10, "b", ""),
            Threshold::new(10, "c", ""),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RuleError::Unordered {
                index: 2,
                previous: 10,
                value: 10
            }
        );
    }
}

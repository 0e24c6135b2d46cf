//! Progress aggregation over bounded counters.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use comeback_core::{Clock, CompletionEvent, Counter, CounterId, Time};
use tracing::{debug, info};

use crate::error::{ProgressError, Result};

/// Outcome of one `record_progress` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Counter state after the update
    pub counter: Counter,

    /// Set only on the call that moved the counter from incomplete to complete
    pub completion: Option<CompletionEvent>,
}

/// Apply `delta` to the counter `id`, clamping to `[0, target]`.
///
/// The first time the counter reaches its target, `completed_at` is stamped
/// with `now` and a completion event is returned. Later calls never emit
/// again, even if the counter dips below its target and climbs back.
pub fn record_progress(
    counters: &mut HashMap<CounterId, Counter>,
    id: &CounterId,
    delta: i64,
    now: Time,
) -> Result<ProgressUpdate> {
    let counter = counters
        .get_mut(id)
        .ok_or_else(|| ProgressError::UnknownCounter(id.clone()))?;

    let was_complete = counter.is_complete();
    let next = (counter.current as i64).saturating_add(delta).clamp(0, counter.target as i64);
    counter.current = next as u32;

    let completion = if !was_complete && counter.is_complete() && counter.completed_at.is_none() {
        counter.completed_at = Some(now);
        Some(CompletionEvent::new(id.clone(), now))
    } else {
        if was_complete && counter.completed_at.is_none() {
            // Complete from the start: stamp it without an event
            counter.completed_at = Some(now);
        }
        None
    };

    debug!("Counter {} now {}/{}", id, counter.current, counter.target);

    Ok(ProgressUpdate {
        counter: counter.clone(),
        completion,
    })
}

/// A snapshot of every counter at a point in time.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// When snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// `(id, ratio, complete)` in registration order
    pub counters: Vec<(CounterId, f64, bool)>,
}

/// Set of independent bounded counters.
pub struct ProgressAggregator {
    counters: HashMap<CounterId, Counter>,
    order: Vec<CounterId>,
    clock: Arc<dyn Clock>,
}

impl ProgressAggregator {
    /// Create an empty aggregator.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            counters: HashMap::new(),
            order: Vec::new(),
            clock,
        }
    }

    /// Register a counter.
    ///
    /// A counter that arrives already complete keeps (or gets) a
    /// `completed_at` stamp so it never emits a completion event later.
    /// An incomplete counter carrying a stamp is rejected.
    pub fn register(&mut self, mut counter: Counter) -> Result<()> {
        if counter.target == 0 {
            return Err(ProgressError::ZeroTarget(counter.id));
        }
        if self.counters.contains_key(&counter.id) {
            return Err(ProgressError::DuplicateCounter(counter.id));
        }

        counter.current = counter.current.min(counter.target);
        if !counter.is_complete() && counter.completed_at.is_some() {
            return Err(ProgressError::CompletedBeforeTarget(counter.id));
        }
        if counter.is_complete() && counter.completed_at.is_none() {
            counter.completed_at = Some(self.clock.now());
        }

        self.order.push(counter.id.clone());
        self.counters.insert(counter.id.clone(), counter);
        Ok(())
    }

    /// Get a counter.
    pub fn get(&self, id: &CounterId) -> Option<&Counter> {
        self.counters.get(id)
    }

    /// Whether the counter is complete.
    pub fn is_complete(&self, id: &CounterId) -> Result<bool> {
        self.counters
            .get(id)
            .map(Counter::is_complete)
            .ok_or_else(|| ProgressError::UnknownCounter(id.clone()))
    }

    /// Record progress on a counter.
    pub fn record_progress(&mut self, id: &CounterId, delta: i64) -> Result<ProgressUpdate> {
        let update = record_progress(&mut self.counters, id, delta, self.clock.now())?;
        if let Some(event) = &update.completion {
            info!("Counter {} completed at {}", event.counter_id, event.completed_at);
        }
        Ok(update)
    }

    /// Counters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Counter> {
        self.order.iter().filter_map(|id| self.counters.get(id))
    }

    /// Number of registered counters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no counters are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take a progress snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            timestamp: self.clock.now(),
            counters: self
                .iter()
                .map(|c| (c.id.clone(), c.ratio(), c.is_complete()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use comeback_core::FixedClock;

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn aggregator() -> ProgressAggregator {
        let mut agg = ProgressAggregator::new(Arc::new(FixedClock::new(now())));
        agg.register(Counter::new("gym-beast", 7, 10)).unwrap();
        agg.register(Counter::new("knowledge-seeker", 3, 5)).unwrap();
        agg
    }

    #[test]
    fn test_unknown_id_fails() {
        let mut agg = aggregator();
        let err = agg.record_progress(&CounterId::new("nope"), 1).unwrap_err();
        assert_eq!(err, ProgressError::UnknownCounter(CounterId::new("nope")));
        assert!(agg.is_complete(&CounterId::new("nope")).is_err());
    }

    #[test]
    fn test_increment_clamps_to_target() {
        let mut agg = aggregator();
        let update = agg.record_progress(&CounterId::new("gym-beast"), 50).unwrap();
        assert_eq!(update.counter.current, 10);
        assert_eq!(update.counter.ratio(), 1.0);

        let update = agg.record_progress(&CounterId::new("gym-beast"), 1).unwrap();
        assert_eq!(update.counter.current, 10);
    }

    #[test]
    fn test_decrement_clamps_to_zero() {
        let mut agg = aggregator();
        let update = agg.record_progress(&CounterId::new("knowledge-seeker"), -9).unwrap();
        assert_eq!(update.counter.current, 0);
        assert_eq!(update.counter.ratio(), 0.0);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut agg = aggregator();
        let id = CounterId::new("gym-beast");

        let fired: Vec<bool> = [1, 1, 1, 1, 1, -3, 5]
            .iter()
            .map(|delta| agg.record_progress(&id, *delta).unwrap().completion.is_some())
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false, false, false]);
        assert_eq!(agg.get(&id).unwrap().completed_at, Some(now()));
    }

    #[test]
    fn test_completion_event_carries_counter_and_time() {
        let mut agg = aggregator();
        let event = agg
            .record_progress(&CounterId::new("knowledge-seeker"), 2)
            .unwrap()
            .completion
            .unwrap();
        assert_eq!(event.counter_id, CounterId::new("knowledge-seeker"));
        assert_eq!(event.completed_at, now());
    }

    #[test]
    fn test_already_complete_counter_never_fires() {
        let mut agg = aggregator();
        agg.register(Counter::new("first-day", 1, 1)).unwrap();
        let update = agg.record_progress(&CounterId::new("first-day"), 1).unwrap();
        assert!(update.completion.is_none());
        assert!(agg.is_complete(&CounterId::new("first-day")).unwrap());
    }

    #[test]
    fn test_complete_counter_outside_aggregator_never_fires() {
        let mut counters = HashMap::new();
        let id = CounterId::new("first-day");
        counters.insert(id.clone(), Counter::new("first-day", 1, 1));

        for delta in [0, 1, -1, 1] {
            let update = record_progress(&mut counters, &id, delta, now()).unwrap();
            assert!(update.completion.is_none(), "delta {}", delta);
        }
        assert_eq!(counters[&id].completed_at, Some(now()));
    }

    #[test]
    fn test_free_function_fires_on_transition() {
        let mut counters = HashMap::new();
        let id = CounterId::new("gym-beast");
        counters.insert(id.clone(), Counter::new("gym-beast", 9, 10));

        assert!(record_progress(&mut counters, &id, 0, now()).unwrap().completion.is_none());
        assert!(record_progress(&mut counters, &id, 1, now()).unwrap().completion.is_some());
        assert!(record_progress(&mut counters, &id, 0, now()).unwrap().completion.is_none());
    }

    #[test]
    fn test_register_rejects_stamped_incomplete_counter() {
        let mut agg = aggregator();
        let mut counter = Counter::new("month-master", 23, 30);
        counter.completed_at = Some(now());
        assert_eq!(
            agg.register(counter).unwrap_err(),
            ProgressError::CompletedBeforeTarget(CounterId::new("month-master"))
        );
        assert!(agg.get(&CounterId::new("month-master")).is_none());
    }

    #[test]
    fn test_register_rejects_bad_counters() {
        let mut agg = aggregator();
        assert_eq!(
            agg.register(Counter::new("gym-beast", 0, 3)).unwrap_err(),
            ProgressError::DuplicateCounter(CounterId::new("gym-beast"))
        );
        assert_eq!(
            agg.register(Counter::new("empty", 0, 0)).unwrap_err(),
            ProgressError::ZeroTarget(CounterId::new("empty"))
        );
    }

    #[test]
    fn test_snapshot_keeps_registration_order() {
        let agg = aggregator();
        let snapshot = agg.snapshot();
        let ids: Vec<&str> = snapshot.counters.iter().map(|(id, _, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["gym-beast", "knowledge-seeker"]);
        assert!((snapshot.counters[1].1 - 0.6).abs() < 1e-9);
        assert_eq!(snapshot.timestamp, now());
    }
}

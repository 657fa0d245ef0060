//! The event schedule.
//!
//! Events are bucketed by firing second. The controller advances the clock
//! and drains whatever became due; the schedule itself never looks at the
//! clock. Cancellation goes through the id index so it stays cheap even
//! with many pending events.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::event::{EventPayload, ScheduledEvent, ScheduledEventId};

/// Time-keyed store of one-shot events.
///
/// Every event fires at most once: draining removes it, and so does
/// cancellation. Firing order is ascending time; events sharing a second
/// fire in scheduling order.
#[derive(Clone, Debug)]
pub struct EventSchedule {
    /// Pending events bucketed by firing second, in scheduling order.
    /// SmallVec optimizes for the common case of one event per second.
    by_time: FxHashMap<u32, SmallVec<[ScheduledEvent; 2]>>,

    /// Firing second per live id, for cancellation.
    time_of: FxHashMap<ScheduledEventId, u32>,

    /// Next id to allocate.
    next_id: u64,
}

impl Default for EventSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSchedule {
    /// Create a new empty schedule.
    pub fn new() -> Self {
        Self {
            by_time: FxHashMap::default(),
            time_of: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Schedule a one-shot event at `time` seconds, returning its id.
    pub fn schedule(&mut self, time: u32, payload: EventPayload) -> ScheduledEventId {
        let id = ScheduledEventId::new(self.next_id);
        self.next_id += 1;

        self.by_time
            .entry(time)
            .or_default()
            .push(ScheduledEvent { id, time, payload });
        self.time_of.insert(id, time);

        tracing::debug!(%id, time, "Scheduled event");
        id
    }

    /// Cancel a pending event.
    ///
    /// Returns the removed event, or `None` if the id is unknown or the
    /// event already fired.
    pub fn cancel(&mut self, id: ScheduledEventId) -> Option<ScheduledEvent> {
        let time = self.time_of.remove(&id)?;
        let bucket = self.by_time.get_mut(&time)?;
        let pos = bucket.iter().position(|e| e.id == id)?;
        let event = bucket.remove(pos);
        if bucket.is_empty() {
            self.by_time.remove(&time);
        }
        tracing::debug!(%id, "Cancelled scheduled event");
        Some(event)
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.by_time.clear();
        self.time_of.clear();
    }

    /// Remove and return every event due at or before `now`, in firing
    /// order.
    pub fn drain_due(&mut self, now: u32) -> Vec<ScheduledEvent> {
        // Typically zero or one second comes due per tick.
        let mut due_times: SmallVec<[u32; 4]> = self
            .by_time
            .keys()
            .copied()
            .filter(|&time| time <= now)
            .collect();
        if due_times.is_empty() {
            return Vec::new();
        }
        due_times.sort_unstable();

        let mut due = Vec::new();
        for time in due_times {
            if let Some(bucket) = self.by_time.remove(&time) {
                for event in bucket {
                    self.time_of.remove(&event.id);
                    due.push(event);
                }
            }
        }
        due
    }

    /// Iterate pending events in firing order.
    #[must_use]
    pub fn events(&self) -> Vec<&ScheduledEvent> {
        let mut times: Vec<u32> = self.by_time.keys().copied().collect();
        times.sort_unstable();

        times
            .into_iter()
            .filter_map(|time| self.by_time.get(&time))
            .flatten()
            .collect()
    }

    /// Get pending event count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time_of.len()
    }

    /// Check if the schedule is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_of.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut schedule = EventSchedule::new();
        let a = schedule.schedule(5, EventPayload::new());
        let b = schedule.schedule(5, EventPayload::new());
        let c = schedule.schedule(1, EventPayload::new());

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn test_events_in_firing_order() {
        let mut schedule = EventSchedule::new();
        let late = schedule.schedule(9, EventPayload::new());
        let early = schedule.schedule(2, EventPayload::new());
        let tie_first = schedule.schedule(5, EventPayload::new());
        let tie_second = schedule.schedule(5, EventPayload::new());

        let order: Vec<ScheduledEventId> = schedule.events().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![early, tie_first, tie_second, late]);
    }

    #[test]
    fn test_drain_due_removes_and_orders() {
        let mut schedule = EventSchedule::new();
        let at_three = schedule.schedule(3, EventPayload::new());
        let at_one = schedule.schedule(1, EventPayload::new());
        let at_ten = schedule.schedule(10, EventPayload::new());

        let due = schedule.drain_due(5);
        let ids: Vec<ScheduledEventId> = due.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![at_one, at_three]);
        assert_eq!(schedule.len(), 1);

        // Already drained events never fire again.
        assert!(schedule.drain_due(5).is_empty());

        let rest = schedule.drain_due(10);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, at_ten);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_drain_due_ties_in_scheduling_order() {
        let mut schedule = EventSchedule::new();
        let first = schedule.schedule(4, EventPayload::new().with_tag("first"));
        let second = schedule.schedule(4, EventPayload::new().with_tag("second"));

        let due = schedule.drain_due(4);
        assert_eq!(due[0].id, first);
        assert_eq!(due[1].id, second);
    }

    #[test]
    fn test_cancel() {
        let mut schedule = EventSchedule::new();
        let keep = schedule.schedule(3, EventPayload::new());
        let drop = schedule.schedule(3, EventPayload::new());

        let cancelled = schedule.cancel(drop).unwrap();
        assert_eq!(cancelled.id, drop);
        assert_eq!(schedule.len(), 1);

        let due = schedule.drain_due(3);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, keep);
    }

    #[test]
    fn test_cancel_unknown_is_none() {
        let mut schedule = EventSchedule::new();
        schedule.schedule(3, EventPayload::new());

        assert!(schedule.cancel(ScheduledEventId::new(999)).is_none());
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut schedule = EventSchedule::new();
        schedule.schedule(1, EventPayload::new());
        schedule.schedule(2, EventPayload::new());

        schedule.clear();
        assert!(schedule.is_empty());
        assert!(schedule.drain_due(10).is_empty());
    }
}

//! Animation scheduler
//!
//! Holds delayed entrance triggers. Every timer belongs to an element so
//! that tearing the element down can drop whatever it still has pending;
//! nothing scheduled here outlives its owner.

use athenix_core::ElementId;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct TimerId;
}

struct PendingTimer {
    owner: ElementId,
    remaining_ms: f32,
    /// Insertion order, breaks ties between timers due on the same frame
    seq: u64,
}

/// A timer whose delay elapsed during [`AnimationScheduler::advance`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub owner: ElementId,
    /// How far past the deadline the frame ended, in milliseconds
    pub overshoot_ms: f32,
}

/// Frame-driven one-shot timers keyed by owner
pub struct AnimationScheduler {
    timers: SlotMap<TimerId, PendingTimer>,
    next_seq: u64,
    elapsed_ms: f64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Schedule a one-shot timer for `owner`, due `delay_ms` from now
    pub fn schedule(&mut self, owner: ElementId, delay_ms: u32) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.timers.insert(PendingTimer {
            owner,
            remaining_ms: delay_ms as f32,
            seq,
        });
        tracing::debug!(%owner, delay_ms, "scheduled entrance timer");
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Cancel every pending timer owned by `owner`
    pub fn cancel_owner(&mut self, owner: ElementId) -> usize {
        let before = self.timers.len();
        self.timers.retain(|_, timer| timer.owner != owner);
        let cancelled = before - self.timers.len();
        if cancelled > 0 {
            tracing::debug!(%owner, cancelled, "cancelled pending timers");
        }
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether `owner` still has anything scheduled
    pub fn has_pending_for(&self, owner: ElementId) -> bool {
        self.timers.values().any(|timer| timer.owner == owner)
    }

    /// Total time advanced since creation
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Advance the clock by `dt_ms` and return the timers that came due,
    /// earliest deadline first.
    pub fn advance(&mut self, dt_ms: f32) -> SmallVec<[FiredTimer; 8]> {
        let dt_ms = dt_ms.max(0.0);
        self.elapsed_ms += dt_ms as f64;

        let mut due: SmallVec<[(u64, FiredTimer); 8]> = SmallVec::new();
        for (id, timer) in self.timers.iter_mut() {
            timer.remaining_ms -= dt_ms;
            if timer.remaining_ms <= 0.0 {
                due.push((
                    timer.seq,
                    FiredTimer {
                        id,
                        owner: timer.owner,
                        overshoot_ms: -timer.remaining_ms,
                    },
                ));
            }
        }

        // Larger overshoot means an earlier deadline
        due.sort_by(|(seq_a, a), (seq_b, b)| {
            b.overshoot_ms
                .total_cmp(&a.overshoot_ms)
                .then(seq_a.cmp(seq_b))
        });

        due.into_iter()
            .map(|(_, fired)| {
                self.timers.remove(fired.id);
                fired
            })
            .collect()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_delay() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.schedule(ElementId(1), 100);

        assert!(scheduler.advance(60.0).is_empty());
        assert!(scheduler.is_pending(id));

        let fired = scheduler.advance(60.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, id);
        assert_eq!(fired[0].owner, ElementId(1));
        assert!((fired[0].overshoot_ms - 20.0).abs() < 1e-4);
        assert!(!scheduler.is_pending(id));
    }

    #[test]
    fn test_fired_in_deadline_order() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(ElementId(3), 400);
        scheduler.schedule(ElementId(1), 0);
        scheduler.schedule(ElementId(2), 200);

        let owners: Vec<_> = scheduler.advance(1000.0).iter().map(|f| f.owner).collect();
        assert_eq!(owners, vec![ElementId(1), ElementId(2), ElementId(3)]);
    }

    #[test]
    fn test_same_deadline_keeps_insertion_order() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(ElementId(9), 100);
        scheduler.schedule(ElementId(4), 100);

        let owners: Vec<_> = scheduler.advance(100.0).iter().map(|f| f.owner).collect();
        assert_eq!(owners, vec![ElementId(9), ElementId(4)]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.schedule(ElementId(1), 50);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(100.0).is_empty());
    }

    #[test]
    fn test_cancel_owner() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(ElementId(1), 50);
        scheduler.schedule(ElementId(1), 150);
        scheduler.schedule(ElementId(2), 50);

        assert_eq!(scheduler.cancel_owner(ElementId(1)), 2);
        assert!(!scheduler.has_pending_for(ElementId(1)));
        assert!(scheduler.has_pending_for(ElementId(2)));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_elapsed_accumulates() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.advance(16.0);
        scheduler.advance(-5.0);
        scheduler.advance(4.0);
        assert!((scheduler.elapsed_ms() - 20.0).abs() < 1e-9);
    }
}

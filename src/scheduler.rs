//! "Run after delay" queue for the owning loop.
//!
//! Items are released in due-time order; items due at the same instant come
//! out in the order they were scheduled. The queue does not know about the
//! clock: the loop passes `now` in, which keeps it deterministic in tests.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

struct Scheduled<T> {
    due: Instant,
    seq: u64,
    item: T,
}

impl<T> Scheduled<T> {
    const fn key(&self) -> (Instant, u64) { (self.due, self.seq) }
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.key().cmp(&other.key())
    }
}

pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Scheduled<T>>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    pub const fn new() -> Self { Self { queue: BinaryHeap::new(), next_seq: 0 } }

    pub fn schedule(
        &mut self,
        due: Instant,
        item: T,
    ) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Reverse(Scheduled { due, seq, item }));
    }

    /// Earliest due time, if anything is queued.
    pub fn next_due(&self) -> Option<Instant> { self.queue.peek().map(|Reverse(s)| s.due) }

    /// Remove and return the earliest item that is due at `now`.
    pub fn pop_due(
        &mut self,
        now: Instant,
    ) -> Option<T> {
        if self.next_due()? > now {
            return None;
        }
        self.queue.pop().map(|Reverse(s)| s.item)
    }

    #[inline]
    pub fn len(&self) -> usize { self.queue.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    /// Drop everything still queued.
    pub fn clear(&mut self) { self.queue.clear(); }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_releases_in_due_order() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0 + Duration::from_millis(500), "check");
        scheduler.schedule(t0 + Duration::from_millis(5), "jobs");

        assert_eq!(scheduler.next_due(), Some(t0 + Duration::from_millis(5)));
        assert_eq!(scheduler.pop_due(t0), None, "nothing is due yet");
        assert_eq!(scheduler.pop_due(t0 + Duration::from_millis(5)), Some("jobs"));
        assert_eq!(scheduler.pop_due(t0 + Duration::from_millis(499)), None);
        assert_eq!(scheduler.pop_due(t0 + Duration::from_secs(1)), Some("check"));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_same_instant_is_fifo() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        for i in 0..5 {
            scheduler.schedule(t0, i);
        }
        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(t0)).collect();
        assert_eq!(order, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clear() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(t0, ());
        scheduler.schedule(t0, ());
        assert_eq!(scheduler.len(), 2);
        scheduler.clear();
        assert_eq!(scheduler.next_due(), None);
        assert_eq!(scheduler.pop_due(t0), None);
    }
}

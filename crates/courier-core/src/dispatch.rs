//! Dispatch priority queue: shortest delivery duration first.
//!
//! Design:
//! - `BinaryHeap` over a private entry type whose `Ord` is reversed, so the
//!   max-heap pops the smallest duration.
//! - Each offer takes a sequence number from a counter that only grows.
//!   It is the secondary key, which makes equal durations come out in the
//!   order they were offered. Without it the heap gives no order among
//!   ties.
//! - Entries carry a copy of `duration` next to the shipment so the
//!   comparison never reaches into the shipment itself.
//!
//! # Learning points
//! - `Reverse`-style ordering written out by hand in `Ord::cmp`
//! - `Ordering::then_with` for a lexicographic (duration, seq) key
//! - `PartialEq` derived from `cmp`, so `Eq` and `Ord` cannot disagree

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::Shipment;

/// Heap entry.
///
/// BinaryHeap is a max-heap, so `Ord` is reversed: smaller duration means
/// higher priority, and among equal durations the lower sequence number
/// (earlier offer) wins.
///
/// # Design note
/// Equality compares (duration, seq) only and ignores the shipment. `seq`
/// is unique per queue, so two live entries are never equal.
///
/// Example, offers in this order:
/// - A duration 2 (seq 0)
/// - B duration 1 (seq 1)
/// - C duration 2 (seq 2)
///
/// poll order: B, A, C
#[derive(Debug, Clone)]
struct PendingDispatch {
    duration: u32,
    seq: u64,
    shipment: Shipment,
}

impl PartialEq for PendingDispatch {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingDispatch {}

impl PartialOrd for PendingDispatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingDispatch {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .duration
            .cmp(&self.duration)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of pending shipments keyed by delivery duration.
///
/// Ties on duration come out in offer order.
#[derive(Debug, Clone, Default)]
pub struct DispatchQueue {
    heap: BinaryHeap<PendingDispatch>,
    next_seq: u64,
}

impl DispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(log n). The shipment's duration is read once, at offer time.
    pub fn offer(&mut self, shipment: Shipment) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(PendingDispatch {
            duration: shipment.duration(),
            seq,
            shipment,
        });
    }

    /// Remove the shipment with the smallest duration. `None` when empty.
    /// O(log n).
    pub fn poll(&mut self) -> Option<Shipment> {
        self.heap.pop().map(|entry| entry.shipment)
    }

    /// O(1).
    pub fn peek(&self) -> Option<&Shipment> {
        self.heap.peek().map(|entry| &entry.shipment)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueDate, ShipmentId};

    fn shipment(id: &str, duration: u32) -> Shipment {
        Shipment::new(
            ShipmentId::new(id),
            IssueDate::parse("20240101").unwrap(),
            false,
            duration,
            "Bursa",
        )
    }

    #[test]
    fn polls_shortest_duration_first() {
        let mut queue = DispatchQueue::new();
        queue.offer(shipment("a", 5));
        queue.offer(shipment("b", 1));
        queue.offer(shipment("c", 3));

        assert_eq!(queue.poll().map(|s| s.duration()), Some(1));
        assert_eq!(queue.poll().map(|s| s.duration()), Some(3));
        assert_eq!(queue.poll().map(|s| s.duration()), Some(5));
        assert!(queue.poll().is_none());
    }

    #[test]
    fn empty_queue_polls_none() {
        let mut queue = DispatchQueue::new();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
        assert!(queue.poll().is_none());
    }

    #[test]
    fn equal_durations_leave_in_offer_order() {
        let mut queue = DispatchQueue::new();
        for id in ["1", "2", "3", "4"] {
            queue.offer(shipment(id, 2));
        }
        queue.offer(shipment("0", 0));

        let order: Vec<String> = std::iter::from_fn(|| queue.poll())
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(order, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn entries_order_by_duration_then_offer() {
        let a = PendingDispatch { duration: 2, seq: 0, shipment: shipment("a", 2) };
        let b = PendingDispatch { duration: 1, seq: 1, shipment: shipment("b", 1) };
        let c = PendingDispatch { duration: 2, seq: 2, shipment: shipment("c", 2) };

        // reversed: "greater" pops first
        assert!(b > a);
        assert!(a > c);
        assert_ne!(a, c);

        let mut heap: BinaryHeap<_> = [a, b, c].into_iter().collect();
        let order: Vec<String> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.shipment.id().to_string())
            .collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = DispatchQueue::new();
        queue.offer(shipment("a", 2));
        queue.offer(shipment("b", 1));

        assert_eq!(queue.peek().map(|s| s.id().as_str()), Some("b"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.poll().map(|s| s.id().to_string()), Some("b".to_string()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drained_durations_are_non_decreasing() {
        let mut queue = DispatchQueue::new();
        for (i, d) in [4u32, 0, 9, 2, 2, 7, 1, 0, 3, 8, 5].iter().enumerate() {
            queue.offer(shipment(&i.to_string(), *d));
        }

        let drained: Vec<u32> = std::iter::from_fn(|| queue.poll())
            .map(|s| s.duration())
            .collect();
        assert_eq!(drained.len(), 11);
        assert!(drained.windows(2).all(|w| w[0] <= w[1]));
        assert!(queue.poll().is_none());
    }
}

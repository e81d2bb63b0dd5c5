//! Bounded "most recent" window over inserted shipments.

use std::collections::VecDeque;

use crate::domain::Shipment;

/// Number of shipments kept by the recent window.
pub const RECENT_CAPACITY: usize = 5;

/// Fixed-capacity FIFO buffer.
///
/// Eviction follows insertion order, not issue date: when full, the
/// shipment that was pushed earliest goes first. Reads are newest-first.
#[derive(Debug, Clone)]
pub struct RecentWindow {
    // front = oldest insertion, back = newest
    items: VecDeque<Shipment>,
    capacity: usize,
}

impl RecentWindow {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_CAPACITY)
    }

    /// A zero capacity is bumped to 1 so `push` always keeps the newest item.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a shipment, returning the evicted one if the window was full.
    pub fn push(&mut self, shipment: Shipment) -> Option<Shipment> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(shipment);
        evicted
    }

    /// Most recently inserted first.
    pub fn iter(&self) -> impl Iterator<Item = &Shipment> {
        self.items.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentWindow {
    fn default() -> Self {
        Self::new()
    }
}

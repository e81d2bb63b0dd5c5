//! Per-customer shipment history: date-ordered log plus a recent window.

mod recent;

pub use recent::{RECENT_CAPACITY, RecentWindow};

use crate::domain::Shipment;

/// Shipment history of one customer.
///
/// Design:
/// - `ordered` holds every inserted shipment exactly once, ascending by
///   issue date. Equal dates keep insertion order.
/// - `recent` is independent of date order: it tracks the last
///   `RECENT_CAPACITY` insertions.
#[derive(Debug, Clone, Default)]
pub struct ShipmentHistory {
    ordered: Vec<Shipment>,
    recent: RecentWindow,
}

impl ShipmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping date order, and register in the recent window.
    ///
    /// The splice point is found by a linear scan: the new shipment goes
    /// after every shipment whose date is <= its own, so it is the last
    /// among equal dates. O(n).
    pub fn insert_sorted(&mut self, shipment: Shipment) {
        let at = self
            .ordered
            .iter()
            .position(|existing| existing.date() > shipment.date())
            .unwrap_or(self.ordered.len());

        self.recent.push(shipment.clone());
        self.ordered.insert(at, shipment);
    }

    /// Full history, ascending by issue date.
    pub fn all_shipments(&self) -> &[Shipment] {
        &self.ordered
    }

    /// Up to `RECENT_CAPACITY` shipments, most recently inserted first.
    pub fn recent_shipments(&self) -> Vec<&Shipment> {
        self.recent.iter().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shipment> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShipmentHistory {
    type Item = &'a Shipment;
    type IntoIter = std::slice::Iter<'a, Shipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

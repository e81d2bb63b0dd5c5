//! Courier - the application context for one program run.
//!
//! Owns the customer directory, the route topology and the dispatch queue.
//! Front-ends hold one `Courier` and call into it; nothing here is global.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::CustomerDirectory;
use crate::dispatch::DispatchQueue;
use crate::domain::{Customer, CustomerId, IssueDate, Shipment, ShipmentId};
use crate::error::CourierError;
use crate::observability::CourierCounts;
use crate::route::RouteTopology;
use crate::search;

/// Input for `Courier::record_shipment`. The duration is derived, not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShipment {
    pub id: ShipmentId,
    pub date: IssueDate,
    pub delivered: bool,
    pub destination: String,
}

/// Result of `Courier::dispatch_now`: what was offered and what was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    pub queued: Shipment,
    /// Top of the queue after the offer; not necessarily `queued`.
    pub processed: Option<Shipment>,
}

#[derive(Debug, Clone, Default)]
pub struct Courier {
    directory: CustomerDirectory,
    topology: RouteTopology,
    dispatch: DispatchQueue,
}

impl Courier {
    pub fn new(topology: RouteTopology) -> Self {
        Self {
            directory: CustomerDirectory::new(),
            topology,
            dispatch: DispatchQueue::new(),
        }
    }

    pub fn topology(&self) -> &RouteTopology {
        &self.topology
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    // ---- customers ----

    pub fn register_customer(
        &mut self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<(), CourierError> {
        let customer = Customer::new(id, name);
        debug!(customer_id = %customer.id(), "registering customer");
        self.directory.add(customer)
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.directory.find(id)
    }

    pub fn customer_exists(&self, id: &CustomerId) -> bool {
        self.directory.exists(id)
    }

    // ---- shipments ----

    /// Delivery duration for a destination = its depth on the route tree.
    pub fn delivery_duration(&self, destination: &str) -> Result<u32, CourierError> {
        self.topology
            .depth_of(destination)
            .ok_or_else(|| CourierError::UnknownDestination(destination.to_string()))
    }

    /// Build a shipment for `customer_id` and insert it into their history.
    ///
    /// Nothing is inserted when the customer or the destination is unknown.
    pub fn record_shipment(
        &mut self,
        customer_id: &CustomerId,
        new: NewShipment,
    ) -> Result<Shipment, CourierError> {
        if !self.directory.exists(customer_id) {
            return Err(CourierError::CustomerNotFound(customer_id.clone()));
        }
        let duration = self.delivery_duration(&new.destination)?;
        let shipment = Shipment::new(new.id, new.date, new.delivered, duration, new.destination);

        let customer = self
            .directory
            .find_mut(customer_id)
            .ok_or_else(|| CourierError::CustomerNotFound(customer_id.clone()))?;
        customer.history_mut().insert_sorted(shipment.clone());

        debug!(
            customer_id = %customer_id,
            shipment_id = %shipment.id(),
            duration,
            "shipment recorded"
        );
        Ok(shipment)
    }

    /// Full history of a customer, ascending by date.
    pub fn history(&self, customer_id: &CustomerId) -> Result<&[Shipment], CourierError> {
        self.customer(customer_id)
            .map(|c| c.history().all_shipments())
            .ok_or_else(|| CourierError::CustomerNotFound(customer_id.clone()))
    }

    /// Last five insertions of a customer, newest first.
    pub fn recent(&self, customer_id: &CustomerId) -> Result<Vec<&Shipment>, CourierError> {
        self.customer(customer_id)
            .map(|c| c.history().recent_shipments())
            .ok_or_else(|| CourierError::CustomerNotFound(customer_id.clone()))
    }

    fn collect_shipments(&self, delivered: bool) -> Vec<Shipment> {
        self.directory
            .iter()
            .flat_map(|c| c.history().iter())
            .filter(|s| s.is_delivered() == delivered)
            .cloned()
            .collect()
    }

    /// Every undelivered shipment across customers, shortest duration first.
    ///
    /// Input order to the (stable) sort is customer registration order, then
    /// date order within each history.
    pub fn undelivered_by_duration(&self) -> Vec<Shipment> {
        search::sort_by_duration(self.collect_shipments(false))
    }

    /// Look up a delivered shipment by id across all customers.
    pub fn find_delivered(&self, shipment_id: &str) -> Option<Shipment> {
        let mut delivered = self.collect_shipments(true);
        search::sort_by_identifier(&mut delivered);
        let idx = search::search_by_identifier(&delivered, shipment_id)?;
        Some(delivered.swap_remove(idx))
    }

    // ---- dispatch ----

    /// Queue a pending (undelivered) shipment for dispatch.
    pub fn enqueue_dispatch(
        &mut self,
        id: ShipmentId,
        destination: &str,
        date: IssueDate,
    ) -> Result<Shipment, CourierError> {
        let duration = self.delivery_duration(destination)?;
        let shipment = Shipment::new(id, date, false, duration, destination);
        debug!(shipment_id = %shipment.id(), duration, "offered to dispatch");
        self.dispatch.offer(shipment.clone());
        Ok(shipment)
    }

    /// Take the highest-priority pending shipment.
    pub fn next_dispatch(&mut self) -> Option<Shipment> {
        let next = self.dispatch.poll();
        if let Some(shipment) = &next {
            debug!(shipment_id = %shipment.id(), "dispatched");
        }
        next
    }

    pub fn peek_dispatch(&self) -> Option<&Shipment> {
        self.dispatch.peek()
    }

    /// Offer a shipment, then immediately process the top of the queue.
    ///
    /// Nothing is queued when the destination is unknown.
    pub fn dispatch_now(
        &mut self,
        id: ShipmentId,
        destination: &str,
        date: IssueDate,
    ) -> Result<DispatchOutcome, CourierError> {
        let queued = self.enqueue_dispatch(id, destination, date)?;
        let processed = self.next_dispatch();
        Ok(DispatchOutcome { queued, processed })
    }

    // ---- views ----

    pub fn route_lines(&self) -> Vec<String> {
        self.topology.render()
    }

    pub fn counts(&self) -> CourierCounts {
        let mut counts = CourierCounts {
            customers: self.directory.len(),
            pending_dispatch: self.dispatch.len(),
            route_nodes: self.topology.len(),
            ..CourierCounts::default()
        };
        for shipment in self.directory.iter().flat_map(|c| c.history().iter()) {
            counts.shipments += 1;
            if shipment.is_delivered() {
                counts.delivered += 1;
            } else {
                counts.undelivered += 1;
            }
        }
        counts
    }
}

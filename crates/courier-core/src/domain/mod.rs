//! Domain model (ids, shipments, customers).

pub mod customer;
pub mod ids;
pub mod shipment;

pub use customer::Customer;
pub use ids::{CustomerId, Id, IdMarker, NodeId, ShipmentId};
pub use shipment::{IssueDate, Shipment};

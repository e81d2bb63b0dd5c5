//! courier-core
//!
//! Shipment tracking and delivery priority for a courier operation.
//!
//! # Modules
//! - **domain**: ids, shipments, customers
//! - **history**: per-customer date-ordered history and recent window
//! - **route**: route topology (depth = delivery duration)
//! - **search**: merge sort by duration, binary search by id
//! - **dispatch**: min-duration dispatch queue
//! - **directory**: customer registry
//! - **app**: `Courier` context and its builder
//!
//! The data-structure modules never log; only `app` emits `tracing` events.

pub mod app;
pub mod directory;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod history;
pub mod observability;
pub mod route;
pub mod search;

pub use app::{Courier, CourierBuilder, DispatchOutcome, NewShipment};
pub use error::CourierError;

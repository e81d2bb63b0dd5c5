//! App - application layer.
//!
//! Combines the directory, the route topology and the dispatch queue into
//! the operations a front-end needs.
//!
//! # Components
//! - **CourierBuilder**: topology loading and fail-fast checks
//! - **Courier**: the per-run context object and its batch views

pub mod builder;
pub mod courier;

pub use self::builder::CourierBuilder;
pub use self::courier::{Courier, DispatchOutcome, NewShipment};

//! Domain identifiers (strongly-typed IDs).
//!
//! Customer and shipment ids arrive as numeric text from the outside, but
//! they are kept as opaque strings: ordering is lexicographic, so "100"
//! sorts before "99". `Id<T>` uses a phantom marker so a `CustomerId`
//! cannot be passed where a `ShipmentId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for each id kind.
pub trait IdMarker: 'static {
    /// Short label used by `Debug` (e.g. "customer").
    fn kind() -> &'static str;
}

/// Generic text id.
///
/// `T` is only a compile-time tag; the runtime representation is the
/// inner `String`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::kind(), self.value)
    }
}

// ========================================
// Marker types
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomerTag {}

impl IdMarker for CustomerTag {
    fn kind() -> &'static str {
        "customer"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipmentTag {}

impl IdMarker for ShipmentTag {
    fn kind() -> &'static str {
        "shipment"
    }
}

/// Identifier of a customer in the directory.
pub type CustomerId = Id<CustomerTag>;

/// Identifier of a shipment (unique per history by convention, not enforced).
pub type ShipmentId = Id<ShipmentTag>;

/// Handle to a node inside one `RouteTopology` arena.
///
/// Only meaningful for the topology that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

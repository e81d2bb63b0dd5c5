use thiserror::Error;

use crate::domain::{CustomerId, NodeId};

/// Errors raised by the courier core.
///
/// Plain lookup misses (unknown route name, unknown shipment id, empty
/// dispatch queue) are `Option::None` on the data structures themselves;
/// only operations that cannot proceed end up here.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("invalid topology: parent node {0} does not exist")]
    InvalidTopology(NodeId),

    #[error("customer not found: id={0}")]
    CustomerNotFound(CustomerId),

    #[error("customer already registered: id={0}")]
    DuplicateCustomer(CustomerId),

    #[error("destination is not on the route topology: {0}")]
    UnknownDestination(String),

    #[error("topology is missing expected destinations: {0:?}")]
    MissingDestinations(Vec<String>),

    #[error("invalid issue date {0:?}: expected YYYYMMDD with month 01-12 and day 01-31")]
    InvalidDate(String),

    #[error("topology config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("topology config: {0}")]
    Io(#[from] std::io::Error),
}

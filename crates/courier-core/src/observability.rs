use serde::{Deserialize, Serialize};

/// Snapshot of what a `Courier` currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierCounts {
    pub customers: usize,
    pub shipments: usize,
    pub delivered: usize,
    pub undelivered: usize,
    pub pending_dispatch: usize,
    pub route_nodes: usize,
}

use super::CustomerId;
use crate::history::ShipmentHistory;

/// A customer and the shipment history it exclusively owns.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    history: ShipmentHistory,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            history: ShipmentHistory::new(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &ShipmentHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ShipmentHistory {
        &mut self.history
    }
}

//! CustomerDirectory - customer registration and lookup.
//!
//! Customers are kept in registration order; the batch views walk them in
//! that order. Lookup is a linear scan.

use crate::domain::{Customer, CustomerId};
use crate::error::CourierError;

#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer. Ids are unique.
    pub fn add(&mut self, customer: Customer) -> Result<(), CourierError> {
        if self.exists(customer.id()) {
            return Err(CourierError::DuplicateCustomer(customer.id().clone()));
        }
        self.customers.push(customer);
        Ok(())
    }

    pub fn find(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    pub fn find_mut(&mut self, id: &CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id() == id)
    }

    pub fn exists(&self, id: &CustomerId) -> bool {
        self.find(id).is_some()
    }

    /// Registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ShipmentId;
use crate::error::CourierError;

/// Issue date in `YYYYMMDD` form.
///
/// Fixed width, so comparing the text compares the dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueDate(String);

impl IssueDate {
    /// Accepts 8 ASCII digits with month 01-12 and day 01-31.
    ///
    /// No days-per-month or leap-year check: "20240231" is accepted.
    pub fn parse(s: &str) -> Result<Self, CourierError> {
        let invalid = || CourierError::InvalidDate(s.to_string());
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let month: u8 = s[4..6].parse().map_err(|_| invalid())?;
        let day: u8 = s[6..8].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IssueDate {
    type Error = CourierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IssueDate> for String {
    fn from(date: IssueDate) -> Self {
        date.0
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single package movement record.
///
/// Immutable once built: the history, the dispatch queue and the batch
/// views only ever read it or move it around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    id: ShipmentId,
    date: IssueDate,
    delivered: bool,
    /// Delivery duration in time steps (destination depth on the route tree).
    duration: u32,
    destination: String,
}

impl Shipment {
    pub fn new(
        id: ShipmentId,
        date: IssueDate,
        delivered: bool,
        duration: u32,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            delivered,
            duration,
            destination: destination.into(),
        }
    }

    pub fn id(&self) -> &ShipmentId {
        &self.id
    }

    pub fn date(&self) -> &IssueDate {
        &self.date
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

//! Interactive menu over a `Courier`.
//!
//! Generic over the input/output streams so tests can drive it with a
//! script instead of a terminal.

use std::io::{self, BufRead, Write};

use courier_core::domain::{CustomerId, IssueDate, Shipment, ShipmentId};
use courier_core::{Courier, CourierError, NewShipment};
use tracing::{debug, warn};

use crate::validate;

const MENU: &str = "\
--- Courier Menu ---
1. Add customer
2. Add shipment to customer
3. Find delivered shipment (binary search)
4. Show shipment history
5. Show last 5 shipments
6. List undelivered shipments by delivery time (merge sort)
7. Show delivery routes
8. Queue shipment for dispatch and process the top one
0. Exit";

/// Drives one interactive session until `0` or end of input.
pub struct Menu<'a, R, W> {
    courier: &'a mut Courier,
    input: R,
    output: W,
    /// Issue date for shipments queued through option 8.
    dispatch_date: IssueDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(courier: &'a mut Courier, input: R, output: W, dispatch_date: IssueDate) -> Self {
        Self {
            courier,
            input,
            output,
            dispatch_date,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };
            debug!(choice = %choice, "menu choice");

            match choice.as_str() {
                "0" => {
                    writeln!(self.output, "Shutting down...")?;
                    break;
                }
                "1" => self.add_customer()?,
                "2" => self.add_shipment()?,
                "3" => self.find_delivered()?,
                "4" => self.show_history()?,
                "5" => self.show_recent()?,
                "6" => self.list_undelivered()?,
                "7" => self.show_routes()?,
                "8" => self.dispatch()?,
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
        Ok(())
    }

    /// Print `label`, read one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: impl std::fmt::Display) -> io::Result<()> {
        warn!(error = %err, "request rejected");
        writeln!(self.output, "Error: {err}")
    }

    fn add_customer(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.prompt("Customer ID (digits only): ")? else {
            return Ok(());
        };
        let id = match validate::numeric_id(&raw_id, "customer ID") {
            Ok(id) => CustomerId::new(id),
            Err(e) => return self.report(e),
        };
        if self.courier.customer_exists(&id) {
            return self.report(CourierError::DuplicateCustomer(id));
        }

        let Some(raw_name) = self.prompt("Customer full name (letters only): ")? else {
            return Ok(());
        };
        let name = match validate::person_name(&raw_name) {
            Ok(name) => name.to_string(),
            Err(e) => return self.report(e),
        };

        match self.courier.register_customer(id, name) {
            Ok(()) => writeln!(self.output, "Customer added."),
            Err(e) => self.report(e),
        }
    }

    fn add_shipment(&mut self) -> io::Result<()> {
        let Some(raw_customer) = self.prompt("Customer ID: ")? else {
            return Ok(());
        };
        let customer_id = CustomerId::new(raw_customer);
        if !self.courier.customer_exists(&customer_id) {
            return self.report(CourierError::CustomerNotFound(customer_id));
        }

        let Some(raw_id) = self.prompt("Shipment ID: ")? else {
            return Ok(());
        };
        let id = match validate::numeric_id(&raw_id, "shipment ID") {
            Ok(id) => ShipmentId::new(id),
            Err(e) => return self.report(e),
        };

        let Some(raw_date) = self.prompt("Date (YYYYMMDD): ")? else {
            return Ok(());
        };
        let date = match validate::issue_date(&raw_date) {
            Ok(date) => date,
            Err(e) => return self.report(e),
        };

        let Some(raw_delivered) = self.prompt("Delivered? (true/false): ")? else {
            return Ok(());
        };
        let delivered = validate::delivered_flag(&raw_delivered);

        let Some(raw_destination) = self.prompt("Destination city: ")? else {
            return Ok(());
        };
        let destination = match validate::destination(&raw_destination) {
            Ok(d) => d.to_string(),
            Err(e) => return self.report(e),
        };

        let new = NewShipment {
            id,
            date,
            delivered,
            destination,
        };
        match self.courier.record_shipment(&customer_id, new) {
            Ok(shipment) => writeln!(
                self.output,
                "Shipment added. Delivery time (derived): {} steps.",
                shipment.duration()
            ),
            Err(e) => self.report(e),
        }
    }

    fn find_delivered(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.prompt("Shipment ID to search (digits only): ")? else {
            return Ok(());
        };
        let id = match validate::numeric_id(&raw_id, "shipment ID") {
            Ok(id) => id.to_string(),
            Err(e) => return self.report(e),
        };

        match self.courier.find_delivered(&id) {
            Some(shipment) => writeln!(
                self.output,
                "Shipment found: {} (delivered), city: {}",
                shipment.id(),
                shipment.destination()
            ),
            None => writeln!(self.output, "Shipment not found"),
        }
    }

    fn read_customer(&mut self) -> io::Result<Option<CustomerId>> {
        let Some(raw) = self.prompt("Customer ID: ")? else {
            return Ok(None);
        };
        let id = CustomerId::new(raw);
        if !self.courier.customer_exists(&id) {
            self.report(CourierError::CustomerNotFound(id))?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    fn show_history(&mut self) -> io::Result<()> {
        let Some(id) = self.read_customer()? else {
            return Ok(());
        };
        let lines: Vec<String> = match self.courier.history(&id) {
            Ok(history) => history.iter().map(history_line).collect(),
            Err(e) => return self.report(e),
        };
        if lines.is_empty() {
            return writeln!(self.output, "Shipment history is empty!");
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_recent(&mut self) -> io::Result<()> {
        let Some(id) = self.read_customer()? else {
            return Ok(());
        };
        let lines: Vec<String> = match self.courier.recent(&id) {
            Ok(recent) => recent.into_iter().map(recent_line).collect(),
            Err(e) => return self.report(e),
        };
        if lines.is_empty() {
            return writeln!(self.output, "Shipment history is empty!");
        }
        writeln!(self.output, "Recent shipments (newest first):")?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn list_undelivered(&mut self) -> io::Result<()> {
        writeln!(self.output, "Undelivered shipments (by delivery time):")?;
        for s in self.courier.undelivered_by_duration() {
            writeln!(
                self.output,
                "ID: {} Time: {} Date: {} City: {}",
                s.id(),
                s.duration(),
                s.date(),
                s.destination()
            )?;
        }
        Ok(())
    }

    fn show_routes(&mut self) -> io::Result<()> {
        let root = self.courier.topology().node(self.courier.topology().root());
        let title = root.map(|n| n.name().to_string()).unwrap_or_default();
        writeln!(self.output, "Route tree ({title} hub):")?;
        for line in self.courier.route_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn dispatch(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.prompt("Shipment ID (digits only): ")? else {
            return Ok(());
        };
        let id = match validate::numeric_id(&raw_id, "shipment ID") {
            Ok(id) => ShipmentId::new(id),
            Err(e) => return self.report(e),
        };
        let Some(raw_destination) = self.prompt("Destination city: ")? else {
            return Ok(());
        };
        let destination = match validate::destination(&raw_destination) {
            Ok(d) => d.to_string(),
            Err(e) => return self.report(e),
        };

        let date = self.dispatch_date.clone();
        let outcome = match self.courier.dispatch_now(id, &destination, date) {
            Ok(outcome) => outcome,
            Err(e) => return self.report(e),
        };
        writeln!(
            self.output,
            "Queued for dispatch (city: {}, time: {}).",
            outcome.queued.destination(),
            outcome.queued.duration()
        )?;
        writeln!(self.output, "Processing highest-priority shipment...")?;
        if let Some(top) = outcome.processed {
            writeln!(
                self.output,
                "Processed: {} Time: {} City: {}",
                top.id(),
                top.duration(),
                top.destination()
            )?;
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn history_line(s: &Shipment) -> String {
    format!(
        "ID: {}, Date: {}, Delivered: {}, Time: {}, City: {}",
        s.id(),
        s.date(),
        yes_no(s.is_delivered()),
        s.duration(),
        s.destination()
    )
}

fn recent_line(s: &Shipment) -> String {
    format!(
        "ID: {}, Date: {}, Delivered: {}, City: {}",
        s.id(),
        s.date(),
        yes_no(s.is_delivered()),
        s.destination()
    )
}

//! Input validation for the interactive menu.
//!
//! The core accepts whatever it is given; these checks run before any
//! value reaches it.

use courier_core::domain::IssueDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must contain digits only")]
    NotNumeric { field: &'static str },

    #[error("name must contain letters and spaces only")]
    InvalidName,

    #[error("date must be YYYYMMDD with month 01-12 and day 01-31")]
    InvalidDate,

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// `^[0-9]+$`, after trimming.
pub fn numeric_id<'a>(input: &'a str, field: &'static str) -> Result<&'a str, InputError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric { field });
    }
    Ok(input)
}

/// Letters (any alphabet, so Turkish names pass) and spaces.
pub fn person_name(input: &str) -> Result<&str, InputError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(InputError::InvalidName);
    }
    Ok(input)
}

pub fn issue_date(input: &str) -> Result<IssueDate, InputError> {
    IssueDate::parse(input.trim()).map_err(|_| InputError::InvalidDate)
}

/// Only a case-insensitive "true" is true; anything else is false.
pub fn delivered_flag(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("true")
}

pub fn destination(input: &str) -> Result<&str, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty("destination"));
    }
    Ok(input)
}

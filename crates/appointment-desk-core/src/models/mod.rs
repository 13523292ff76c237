//! Domain models for the appointment desk.

mod appointment;
mod catalog;

pub use appointment::*;
pub use catalog::*;

use thiserror::Error;

/// Errors parsing enumerated values from their text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Not a bookable time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// Parse an ISO `YYYY-MM-DD` date as produced by a date input.
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, ParseError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}

//! Validation engine for candidate appointments.
//!
//! Every rule runs on every call; a record is valid iff the returned
//! [`ValidationErrors`] is empty. Status and notes are never checked.

mod errors;

pub use errors::*;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{AppointmentDetails, Field};

/// `local@domain.tld` shape. Unanchored: the pattern only has to occur.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Whether `email` has the loose `x@y.z` shape accepted by the form.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate with the default rules.
pub fn validate(details: &AppointmentDetails) -> ValidationErrors {
    Validator::new().validate(details)
}

/// Validator for candidate appointment records.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    /// Earliest acceptable appointment date, if enforced
    min_date: Option<NaiveDate>,
}

impl Validator {
    /// Validator applying only the required-field and email-shape rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reject appointment dates before `min_date`.
    pub fn with_min_date(min_date: NaiveDate) -> Self {
        Self {
            min_date: Some(min_date),
        }
    }

    /// Check a candidate record. Pure: the record is not touched.
    pub fn validate(&self, details: &AppointmentDetails) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if details.patient_name.trim().is_empty() {
            errors.insert(Field::PatientName, PATIENT_NAME_REQUIRED);
        }

        if details.email.trim().is_empty() {
            errors.insert(Field::Email, EMAIL_REQUIRED);
        } else if !is_valid_email(&details.email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }

        if details.phone.trim().is_empty() {
            errors.insert(Field::Phone, PHONE_REQUIRED);
        }

        match (details.appointment_date, self.min_date) {
            (None, _) => errors.insert(Field::AppointmentDate, DATE_REQUIRED),
            (Some(date), Some(min)) if date < min => {
                errors.insert(Field::AppointmentDate, DATE_IN_PAST)
            }
            _ => {}
        }

        if details.appointment_time.is_none() {
            errors.insert(Field::AppointmentTime, TIME_REQUIRED);
        }

        if details.service.is_none() {
            errors.insert(Field::Service, SERVICE_REQUIRED);
        }

        errors
    }

    /// Shorthand for `validate(details).is_empty()`.
    pub fn is_valid(&self, details: &AppointmentDetails) -> bool {
        self.validate(details).is_empty()
    }
}

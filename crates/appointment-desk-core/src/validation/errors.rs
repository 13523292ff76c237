//! Field-level validation errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Field;

pub const PATIENT_NAME_REQUIRED: &str = "Patient name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email format is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const DATE_REQUIRED: &str = "Appointment date is required";
pub const DATE_IN_PAST: &str = "Appointment date cannot be in the past";
pub const TIME_REQUIRED: &str = "Appointment time is required";
pub const SERVICE_REQUIRED: &str = "Service selection is required";

/// Messages keyed by the field they belong to. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the message for `field`, returning it if there was one.
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Fields that have an error, in field order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// All messages joined for a one-line notice.
    pub fn summary(&self) -> String {
        self.errors
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

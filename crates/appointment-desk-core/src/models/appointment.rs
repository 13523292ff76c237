//! Appointment records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{Service, TimeSlot};
use super::ParseError;

/// Lifecycle stage of an appointment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Requested, not yet confirmed by the clinic
    #[default]
    Pending,
    /// Confirmed by the clinic
    Confirmed,
    /// Visit took place
    Completed,
    /// Called off by either side
    Cancelled,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Confirmed,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Confirmed => "Confirmed",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
        }
    }

    /// Badge variant the dashboard renders this status with.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Status::Confirmed => "default",
            Status::Pending => "secondary",
            Status::Cancelled => "destructive",
            Status::Completed => "outline",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "confirmed" => Ok(Status::Confirmed),
            "completed" => Ok(Status::Completed),
            "cancelled" => Ok(Status::Cancelled),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Editable fields of an appointment, used to key form input and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PatientName,
    Email,
    Phone,
    AppointmentDate,
    AppointmentTime,
    Service,
    Status,
    Notes,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::PatientName,
        Field::Email,
        Field::Phone,
        Field::AppointmentDate,
        Field::AppointmentTime,
        Field::Service,
        Field::Status,
        Field::Notes,
    ];

    /// camelCase name used by the front end.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PatientName => "patientName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::AppointmentDate => "appointmentDate",
            Field::AppointmentTime => "appointmentTime",
            Field::Service => "service",
            Field::Status => "status",
            Field::Notes => "notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

/// Everything about an appointment except its id.
///
/// This is also the shape of a candidate record while it is being edited, so
/// the selectable fields may still be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    /// Patient full name
    pub patient_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone, free format
    pub phone: String,
    /// Calendar date of the visit
    pub appointment_date: Option<NaiveDate>,
    /// Booked slot
    pub appointment_time: Option<TimeSlot>,
    /// Booked service
    pub service: Option<Service>,
    /// Lifecycle stage
    #[serde(default)]
    pub status: Status,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl AppointmentDetails {
    /// Create details with every field filled in and status pending.
    pub fn new(
        patient_name: String,
        email: String,
        phone: String,
        appointment_date: NaiveDate,
        appointment_time: TimeSlot,
        service: Service,
    ) -> Self {
        Self {
            patient_name,
            email,
            phone,
            appointment_date: Some(appointment_date),
            appointment_time: Some(appointment_time),
            service: Some(service),
            status: Status::Pending,
            notes: None,
        }
    }

    /// Set the status, builder style.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the notes, builder style.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A stored appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned id, immutable after creation
    pub id: String,
    #[serde(flatten)]
    pub details: AppointmentDetails,
}

impl Appointment {
    pub fn status(&self) -> Status {
        self.details.status
    }

    /// Whether `needle` (already lowercased) occurs in the patient name, email
    /// or service name.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let d = &self.details;
        d.patient_name.to_lowercase().contains(needle)
            || d.email.to_lowercase().contains(needle)
            || d
                .service
                .map(|s| s.as_str().to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

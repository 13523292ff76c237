//! Bookable services and time slots.
//!
//! Both lists are reproduced verbatim from the front end; the string forms are
//! part of the interface and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::ParseError;

/// Half-hour slots offered by the clinic, morning then afternoon.
pub const TIME_SLOTS: [&str; 16] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "14:00", "14:30",
    "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

/// A service that can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "General Consultation")]
    GeneralConsultation,
    #[serde(rename = "Follow-up Appointment")]
    FollowUpAppointment,
    #[serde(rename = "Specialist Consultation")]
    SpecialistConsultation,
    #[serde(rename = "Routine Checkup")]
    RoutineCheckup,
    #[serde(rename = "Emergency Consultation")]
    EmergencyConsultation,
    #[serde(rename = "Preventive Care")]
    PreventiveCare,
    #[serde(rename = "Diagnostic Tests")]
    DiagnosticTests,
    #[serde(rename = "Vaccination")]
    Vaccination,
}

impl Service {
    /// All services in display order.
    pub const ALL: [Service; 8] = [
        Service::GeneralConsultation,
        Service::FollowUpAppointment,
        Service::SpecialistConsultation,
        Service::RoutineCheckup,
        Service::EmergencyConsultation,
        Service::PreventiveCare,
        Service::DiagnosticTests,
        Service::Vaccination,
    ];

    /// Display name, also the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::GeneralConsultation => "General Consultation",
            Service::FollowUpAppointment => "Follow-up Appointment",
            Service::SpecialistConsultation => "Specialist Consultation",
            Service::RoutineCheckup => "Routine Checkup",
            Service::EmergencyConsultation => "Emergency Consultation",
            Service::PreventiveCare => "Preventive Care",
            Service::DiagnosticTests => "Diagnostic Tests",
            Service::Vaccination => "Vaccination",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .iter()
            .copied()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| ParseError::UnknownService(s.to_string()))
    }
}

/// One of the fixed [`TIME_SLOTS`].
///
/// Construction goes through [`FromStr`], so a `TimeSlot` always names a
/// bookable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct TimeSlot(&'static str);

impl TimeSlot {
    /// All slots in chronological order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        TIME_SLOTS.into_iter().map(TimeSlot)
    }

    /// `HH:MM` form.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether the slot falls in the morning session (before the lunch break).
    pub fn is_morning(&self) -> bool {
        self.0 < "13:00"
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TIME_SLOTS
            .into_iter()
            .find(|slot| *slot == s)
            .map(TimeSlot)
            .ok_or_else(|| ParseError::UnknownTimeSlot(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.0.to_string()
    }
}

//! Dashboard list filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, ParseError, Status};

/// Status restriction for the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

/// Search text plus status filter, as entered on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Free-text query; matched case-insensitively
    pub query: String,
    pub status: StatusFilter,
}

impl ListFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Filter that lets everything through.
    pub fn all() -> Self {
        Self::default()
    }

    /// Status must match AND the query must occur in name, email or service.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.status.matches(appointment.status())
            && appointment.mentions(&self.query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_filter() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "cancelled".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(Status::Cancelled)
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(StatusFilter::Only(Status::Confirmed).to_string(), "confirmed");
    }

    #[test]
    fn test_list_filter_json() {
        let filter = ListFilter::new("jane", StatusFilter::Only(Status::Pending));
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"query":"jane","status":"pending"}"#);
    }

    #[test]
    fn test_list_filter_ands_status_with_query() {
        use crate::models::{AppointmentDetails, Service};

        let mut details = AppointmentDetails::default().with_status(Status::Completed);
        details.patient_name = "Mike Johnson".into();
        details.service = Some(Service::SpecialistConsultation);
        let apt = Appointment {
            id: "3".into(),
            details,
        };

        assert!(ListFilter::new("SPECIALIST", StatusFilter::All).matches(&apt));
        assert!(ListFilter::new("mike", Status::Completed.into()).matches(&apt));
        assert!(!ListFilter::new("mike", Status::Pending.into()).matches(&apt));
        assert!(!ListFilter::new("jane", StatusFilter::All).matches(&apt));
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(Status::Cancelled));
        assert!(StatusFilter::Only(Status::Pending).matches(Status::Pending));
        assert!(!StatusFilter::Only(Status::Pending).matches(Status::Confirmed));
    }
}

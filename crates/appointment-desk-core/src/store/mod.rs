//! In-memory appointment store.
//!
//! Appointments are kept in insertion order. The store does not validate;
//! callers run the [`Validator`](crate::validation::Validator) before handing
//! details over.

mod filter;
mod summary;

pub use filter::*;
pub use summary::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Appointment, AppointmentDetails, Service, Status, TimeSlot};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Appointment not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, owned collection of appointments.
#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the four demonstration appointments, one per
    /// status.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for details in sample_appointments() {
            store.create(details);
        }
        store
    }

    /// Append a new appointment under a fresh id.
    pub fn create(&mut self, details: AppointmentDetails) -> Appointment {
        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            details,
        };
        tracing::debug!(id = %appointment.id, "Created appointment");
        self.appointments.push(appointment.clone());
        appointment
    }

    /// Replace every field but the id, keeping the record's position.
    pub fn update(&mut self, id: &str, details: AppointmentDetails) -> StoreResult<Appointment> {
        let Some(slot) = self.appointments.iter_mut().find(|apt| apt.id == id) else {
            tracing::warn!(id, "Update of unknown appointment");
            return Err(StoreError::NotFound(id.to_string()));
        };
        slot.details = details;
        tracing::debug!(id, "Updated appointment");
        Ok(slot.clone())
    }

    /// Remove an appointment. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|apt| apt.id != id);
        let removed = self.appointments.len() < before;
        tracing::debug!(id, removed, "Deleted appointment");
        removed
    }

    /// Appointments matching `filter`, in insertion order.
    pub fn list(&self, filter: &ListFilter) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| filter.matches(apt))
            .collect()
    }

    /// Summary counts over the whole collection.
    pub fn summarize(&self) -> Summary {
        Summary::from_appointments(&self.appointments)
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|apt| apt.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// All appointments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }
}

fn sample_appointments() -> Vec<AppointmentDetails> {
    // Dates and slots are fixed literals; none of these can fail.
    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, d)
    }
    fn slot(s: &str) -> Option<TimeSlot> {
        s.parse().ok()
    }

    vec![
        AppointmentDetails {
            patient_name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            phone: "+1 (555) 123-4567".into(),
            appointment_date: day(15),
            appointment_time: slot("10:00"),
            service: Some(Service::GeneralConsultation),
            status: Status::Confirmed,
            notes: Some("First time patient".into()),
        },
        AppointmentDetails {
            patient_name: "Jane Smith".into(),
            email: "jane.smith@email.com".into(),
            phone: "+1 (555) 987-6543".into(),
            appointment_date: day(16),
            appointment_time: slot("14:30"),
            service: Some(Service::FollowUpAppointment),
            status: Status::Pending,
            notes: Some("Needs blood test results review".into()),
        },
        AppointmentDetails {
            patient_name: "Mike Johnson".into(),
            email: "mike.johnson@email.com".into(),
            phone: "+1 (555) 456-7890".into(),
            appointment_date: day(17),
            appointment_time: slot("09:30"),
            service: Some(Service::SpecialistConsultation),
            status: Status::Completed,
            notes: Some("Referred by Dr. Williams".into()),
        },
        AppointmentDetails {
            patient_name: "Sarah Wilson".into(),
            email: "sarah.wilson@email.com".into(),
            phone: "+1 (555) 321-0987".into(),
            appointment_date: day(18),
            appointment_time: slot("16:00"),
            service: Some(Service::RoutineCheckup),
            status: Status::Cancelled,
            notes: Some("Patient requested reschedule".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn details(name: &str, email: &str, service: Service, status: Status) -> AppointmentDetails {
        AppointmentDetails::new(
            name.into(),
            email.into(),
            "555-0100".into(),
            NaiveDate::from_ymd_opt(2030, 3, 4).unwrap(),
            "11:00".parse().unwrap(),
            service,
        )
        .with_status(status)
    }

    #[test]
    fn test_create_assigns_unique_ids_in_order() {
        let mut store = AppointmentStore::new();
        let a = store.create(details("A", "a@x.io", Service::Vaccination, Status::Pending));
        let b = store.create(details("B", "b@x.io", Service::Vaccination, Status::Pending));

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID format

        let ids: Vec<_> = store.iter().map(|apt| apt.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut store = AppointmentStore::new();
        let first = store.create(details("A", "a@x.io", Service::Vaccination, Status::Pending));
        let second = store.create(details("B", "b@x.io", Service::Vaccination, Status::Pending));

        let patch = details("Alice", "alice@x.io", Service::PreventiveCare, Status::Confirmed)
            .with_notes("moved");
        let updated = store.update(&first.id, patch.clone()).unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.details, patch);
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().unwrap(), &updated);
        assert_eq!(store.get(&second.id).unwrap(), &second);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = AppointmentStore::new();
        store.create(details("A", "a@x.io", Service::Vaccination, Status::Pending));
        let snapshot: Vec<_> = store.iter().cloned().collect();

        let err = store
            .update("missing", details("B", "b@x.io", Service::Vaccination, Status::Pending))
            .unwrap_err();

        assert_eq!(err, StoreError::NotFound("missing".into()));
        assert_eq!(store.iter().cloned().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn test_delete_twice() {
        let mut store = AppointmentStore::new();
        let a = store.create(details("A", "a@x.io", Service::Vaccination, Status::Pending));
        store.create(details("B", "b@x.io", Service::Vaccination, Status::Pending));

        assert!(store.delete(&a.id));
        assert_eq!(store.len(), 1);
        assert!(store.get(&a.id).is_none());

        assert!(!store.delete(&a.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_query_and_status() {
        let store = AppointmentStore::with_sample_data();

        let jane = store.list(&ListFilter::new("JANE", StatusFilter::All));
        assert_eq!(jane.len(), 1);
        assert_eq!(jane[0].details.patient_name, "Jane Smith");

        // "consultation" hits two services; status narrows it down
        let consults = store.list(&ListFilter::new("consultation", StatusFilter::All));
        assert_eq!(consults.len(), 2);
        let confirmed = store.list(&ListFilter::new(
            "consultation",
            StatusFilter::Only(Status::Confirmed),
        ));
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].details.patient_name, "John Doe");

        let by_email = store.list(&ListFilter::new("wilson@", StatusFilter::All));
        assert_eq!(by_email.len(), 1);

        assert!(store
            .list(&ListFilter::new("nobody", StatusFilter::All))
            .is_empty());
    }

    #[test]
    fn test_empty_query_lists_everything_in_order() {
        let store = AppointmentStore::with_sample_data();
        let names: Vec<_> = store
            .list(&ListFilter::all())
            .iter()
            .map(|apt| apt.details.patient_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Wilson"]
        );
    }

    #[test]
    fn test_summarize_excludes_cancelled() {
        let store = AppointmentStore::with_sample_data();
        let summary = store.summarize();
        assert_eq!(
            summary,
            Summary {
                total: 4,
                confirmed: 1,
                pending: 1,
                completed: 1,
            }
        );
        assert_eq!(summary.cancelled(), 1);
    }

    #[test]
    fn test_summarize_tracks_live_state() {
        let mut store = AppointmentStore::with_sample_data();
        let cancelled = store
            .iter()
            .find(|apt| apt.status() == Status::Cancelled)
            .cloned()
            .unwrap();

        let revived = cancelled.details.clone().with_status(Status::Confirmed);
        store.update(&cancelled.id, revived).unwrap();
        assert_eq!(store.summarize().confirmed, 2);

        store.delete(&cancelled.id);
        assert_eq!(store.summarize().confirmed, 1);
        assert_eq!(store.summarize().total, 3);
    }

    #[test]
    fn test_sample_data_is_valid() {
        let store = AppointmentStore::with_sample_data();
        assert_eq!(store.len(), 4);
        for apt in store.iter() {
            assert!(validate(&apt.details).is_empty(), "{:?}", apt);
        }
    }
}

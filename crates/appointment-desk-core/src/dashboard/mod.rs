//! Admin dashboard session.
//!
//! Ties the store, the search controls and the appointment form together:
//! the form validates, and only a valid submission reaches the store.

mod notice;

pub use notice::*;

use chrono::NaiveDate;

use crate::config::DeskConfig;
use crate::form::{AppointmentForm, FormMode, Submission};
use crate::models::Appointment;
use crate::store::{AppointmentStore, ListFilter, StatusFilter, StoreResult, Summary};
use crate::validation::{ValidationErrors, Validator};

/// Result of submitting the open form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created or updated; the form has been closed.
    Saved {
        appointment: Appointment,
        notice: Notice,
    },
    /// Validation failed; the form stays open with these errors.
    Rejected(ValidationErrors),
    /// The appointment being edited no longer exists; the form has been
    /// closed.
    Failed(Notice),
}

/// Result of deleting an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub removed: bool,
    pub notice: Notice,
}

/// One admin's view of the appointment list.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: AppointmentStore,
    filter: ListFilter,
    form: Option<AppointmentForm>,
    config: DeskConfig,
}

impl Dashboard {
    pub fn new(config: DeskConfig) -> Self {
        let store = if config.seed_sample_data {
            AppointmentStore::with_sample_data()
        } else {
            AppointmentStore::new()
        };
        Self::with_store(store, config)
    }

    /// Dashboard over an existing store.
    pub fn with_store(store: AppointmentStore, config: DeskConfig) -> Self {
        Self {
            store,
            filter: ListFilter::all(),
            form: None,
            config,
        }
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Direct store access for callers that validate on their own.
    pub fn store_mut(&mut self) -> &mut AppointmentStore {
        &mut self.store
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    /// Appointments passing the current search and status filter.
    pub fn visible(&self) -> Vec<&Appointment> {
        self.store.list(&self.filter)
    }

    /// Summary cards; always over the unfiltered list.
    pub fn summary(&self) -> Summary {
        self.store.summarize()
    }

    /// Validator for submissions made on `today`.
    pub fn validator(&self, today: NaiveDate) -> Validator {
        if self.config.reject_past_dates {
            Validator::with_min_date(today)
        } else {
            Validator::new()
        }
    }

    pub fn form(&self) -> Option<&AppointmentForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut AppointmentForm> {
        self.form.as_mut()
    }

    /// Open a blank form, discarding any form already open.
    pub fn open_create_form(&mut self) -> &mut AppointmentForm {
        self.form.insert(AppointmentForm::create())
    }

    /// Open a form pre-filled from appointment `id`.
    pub fn open_edit_form(&mut self, id: &str) -> StoreResult<&mut AppointmentForm> {
        let appointment = self
            .store
            .get(id)
            .ok_or_else(|| crate::store::StoreError::NotFound(id.to_string()))?;
        let form = AppointmentForm::edit(appointment);
        Ok(self.form.insert(form))
    }

    /// Close the form without submitting. Returns whether one was open.
    pub fn close_form(&mut self) -> bool {
        self.form.take().is_some()
    }

    /// Submit the open form, validating against today's date.
    pub fn submit_form(&mut self) -> Option<SubmitOutcome> {
        self.submit_form_on(chrono::Local::now().date_naive())
    }

    /// Submit the open form as of `today`. `None` if no form is open.
    pub fn submit_form_on(&mut self, today: NaiveDate) -> Option<SubmitOutcome> {
        let validator = self.validator(today);
        let submission = self.form.as_mut()?.submit(&validator);

        let outcome = match submission {
            Submission::Rejected(errors) => return Some(SubmitOutcome::Rejected(errors)),
            Submission::Ready {
                mode: FormMode::Create,
                details,
            } => SubmitOutcome::Saved {
                appointment: self.store.create(details),
                notice: Notice::success(CREATED),
            },
            Submission::Ready {
                mode: FormMode::Edit { id },
                details,
            } => match self.store.update(&id, details) {
                Ok(appointment) => SubmitOutcome::Saved {
                    appointment,
                    notice: Notice::success(UPDATED),
                },
                Err(e) => SubmitOutcome::Failed(Notice::error(e.to_string())),
            },
        };

        self.form = None;
        Some(outcome)
    }

    /// Delete appointment `id`. Deleting an unknown id is not an error.
    pub fn delete(&mut self, id: &str) -> Deletion {
        let removed = self.store.delete(id);
        Deletion {
            removed,
            notice: Notice::success(DELETED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Status};
    use crate::validation::DATE_IN_PAST;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn fill(form: &mut AppointmentForm, name: &str) {
        form.set_field(Field::PatientName, name).unwrap();
        form.set_field(Field::Email, "patient@clinic.org").unwrap();
        form.set_field(Field::Phone, "+1 555 0100").unwrap();
        form.set_field(Field::AppointmentDate, "2026-11-02").unwrap();
        form.set_field(Field::AppointmentTime, "10:30").unwrap();
        form.set_field(Field::Service, "Diagnostic Tests").unwrap();
    }

    #[test]
    fn test_new_respects_seed_flag() {
        assert!(Dashboard::new(DeskConfig::default()).store().is_empty());

        let seeded = Dashboard::new(DeskConfig {
            seed_sample_data: true,
            ..Default::default()
        });
        assert_eq!(seeded.store().len(), 4);
    }

    #[test]
    fn test_create_flow() {
        let mut dash = Dashboard::default();
        fill(dash.open_create_form(), "Lee Chen");

        let outcome = dash.submit_form_on(today()).unwrap();
        let SubmitOutcome::Saved {
            appointment,
            notice,
        } = outcome
        else {
            panic!("expected save");
        };

        assert_eq!(notice.title, "Success");
        assert_eq!(notice.description, "Appointment created successfully");
        assert_eq!(appointment.status(), Status::Pending);
        assert!(dash.form().is_none());
        assert_eq!(dash.visible(), vec![&appointment]);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut dash = Dashboard::default();
        dash.open_create_form();

        let outcome = dash.submit_form_on(today()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 6));
        assert!(dash.form().is_some());
        assert!(dash.store().is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let mut dash = Dashboard::new(DeskConfig {
            seed_sample_data: true,
            ..Default::default()
        });
        let id = dash.store().iter().nth(1).unwrap().id.clone();

        let form = dash.open_edit_form(&id).unwrap();
        assert_eq!(form.draft().patient_name, "Jane Smith");
        form.set_field(Field::Status, "confirmed").unwrap();

        let outcome = dash.submit_form_on(today()).unwrap();
        let SubmitOutcome::Saved { appointment, notice } = outcome else {
            panic!("expected save");
        };
        assert_eq!(appointment.id, id);
        assert_eq!(notice.description, "Appointment updated successfully");
        assert_eq!(dash.summary().confirmed, 2);
        assert_eq!(dash.store().len(), 4);
    }

    #[test]
    fn test_edit_target_deleted_meanwhile() {
        let mut dash = Dashboard::new(DeskConfig {
            seed_sample_data: true,
            ..Default::default()
        });
        let id = dash.store().iter().next().unwrap().id.clone();
        dash.open_edit_form(&id).unwrap();
        dash.delete(&id);

        let outcome = dash.submit_form_on(today()).unwrap();
        let SubmitOutcome::Failed(notice) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.description.contains(&id));
        assert!(dash.form().is_none());
        assert_eq!(dash.store().len(), 3);
    }

    #[test]
    fn test_open_edit_unknown() {
        let mut dash = Dashboard::default();
        assert!(dash.open_edit_form("nope").is_err());
        assert!(dash.form().is_none());
    }

    #[test]
    fn test_close_form_discards_draft() {
        let mut dash = Dashboard::default();
        fill(dash.open_create_form(), "Discarded");
        assert!(dash.close_form());
        assert!(!dash.close_form());
        assert!(dash.submit_form_on(today()).is_none());
        assert!(dash.store().is_empty());
    }

    #[test]
    fn test_delete_notice() {
        let mut dash = Dashboard::new(DeskConfig {
            seed_sample_data: true,
            ..Default::default()
        });
        let id = dash.store().iter().next().unwrap().id.clone();

        let first = dash.delete(&id);
        assert!(first.removed);
        assert_eq!(first.notice.description, "Appointment deleted successfully");

        let again = dash.delete(&id);
        assert!(!again.removed);
        assert_eq!(dash.store().len(), 3);
    }

    #[test]
    fn test_search_and_status_filter() {
        let mut dash = Dashboard::new(DeskConfig {
            seed_sample_data: true,
            ..Default::default()
        });

        dash.set_search("SMITH");
        assert_eq!(dash.visible().len(), 1);

        dash.set_status_filter(StatusFilter::Only(Status::Confirmed));
        assert!(dash.visible().is_empty());

        dash.set_search("");
        assert_eq!(dash.visible().len(), 1);
        // summary ignores the filter
        assert_eq!(dash.summary().total, 4);
    }

    #[test]
    fn test_reject_past_dates_when_configured() {
        let mut dash = Dashboard::new(DeskConfig {
            reject_past_dates: true,
            ..Default::default()
        });
        let form = dash.open_create_form();
        fill(form, "Late Booker");
        form.set_field(Field::AppointmentDate, "2026-10-16").unwrap();

        let outcome = dash.submit_form_on(today()).unwrap();
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.get(Field::AppointmentDate), Some(DATE_IN_PAST));

        dash.form_mut()
            .unwrap()
            .set_field(Field::AppointmentDate, "2026-10-17")
            .unwrap();
        assert!(matches!(
            dash.submit_form_on(today()),
            Some(SubmitOutcome::Saved { .. })
        ));
    }
}

//! Appointment Desk Core Library
//!
//! Validation and in-memory scheduling logic behind the clinic's appointment
//! admin screens. The front end renders what this crate returns and feeds
//! user input back in; nothing is persisted.
//!
//! # Architecture
//!
//! ```text
//!   Admin input ──► AppointmentForm (working copy)
//!                          │
//!                     Validator ──► field errors shown inline
//!                          │ valid
//!                          ▼
//!                   AppointmentStore  ◄── delete / list / summarize
//!                          │
//!                 Dashboard listing + summary cards + notices
//!                          │
//!                  Schedule export (JSON / CSV)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, Status, Service, TimeSlot)
//! - [`validation`]: Field-level validation of candidate records
//! - [`store`]: Ordered in-memory store with search and summary
//! - [`form`]: Create/edit form session
//! - [`dashboard`]: Admin session tying form and store together
//! - [`export`]: Schedule export
//! - [`config`]: Constants, log filter and desk options

pub mod config;
pub mod dashboard;
pub mod export;
pub mod form;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::DeskConfig;
pub use dashboard::{Dashboard, Notice, NoticeLevel, SubmitOutcome};
pub use form::{AppointmentForm, FormMode, Submission};
pub use models::{Appointment, AppointmentDetails, Field, Service, Status, TimeSlot};
pub use store::{AppointmentStore, ListFilter, StatusFilter, Summary};
pub use validation::{validate, ValidationErrors, Validator};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DeskError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<store::StoreError> for DeskError {
    fn from(e: store::StoreError) -> Self {
        match e {
            store::StoreError::NotFound(id) => DeskError::NotFound(id),
        }
    }
}

impl From<form::FormError> for DeskError {
    fn from(e: form::FormError) -> Self {
        DeskError::InvalidInput(e.to_string())
    }
}

impl From<models::ParseError> for DeskError {
    fn from(e: models::ParseError) -> Self {
        DeskError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(e: serde_json::Error) -> Self {
        DeskError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for DeskError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DeskError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Logging
// =========================================================================

/// Install the global `tracing` subscriber. Safe to call more than once;
/// later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Start a desk session with the given options.
#[uniffi::export]
pub fn open_desk(config: FfiDeskConfig) -> Arc<AppointmentDeskCore> {
    init_logging();
    let desk_config: DeskConfig = config.into();
    tracing::info!(?desk_config, "{} starting v{}", config::APP_NAME, config::APP_VERSION);
    Arc::new(AppointmentDeskCore {
        dashboard: Mutex::new(Dashboard::new(desk_config)),
    })
}

/// Start a desk session with default options (empty, no date policy).
#[uniffi::export]
pub fn open_desk_default() -> Arc<AppointmentDeskCore> {
    open_desk(DeskConfig::default().into())
}

/// Parse desk options from JSON.
#[uniffi::export]
pub fn parse_desk_config(json: String) -> Result<FfiDeskConfig, DeskError> {
    Ok(DeskConfig::from_json(&json)?.into())
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe dashboard wrapper for FFI.
#[derive(uniffi::Object)]
pub struct AppointmentDeskCore {
    dashboard: Mutex<Dashboard>,
}

#[uniffi::export]
impl AppointmentDeskCore {
    // =========================================================================
    // Reference Data
    // =========================================================================

    /// Service names in display order.
    pub fn service_options(&self) -> Vec<String> {
        Service::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }

    /// Bookable time slots in display order.
    pub fn time_slot_options(&self) -> Vec<String> {
        TimeSlot::all().map(String::from).collect()
    }

    /// Status values in display order.
    pub fn status_options(&self) -> Vec<String> {
        Status::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }

    /// Earliest date the date picker should offer (today, `YYYY-MM-DD`).
    pub fn min_appointment_date(&self) -> String {
        AppointmentForm::min_date(chrono::Local::now().date_naive()).to_string()
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Field errors for a candidate record. Empty means valid.
    pub fn validate_appointment(
        &self,
        input: FfiAppointmentInput,
    ) -> Result<Vec<FfiFieldError>, DeskError> {
        let details = AppointmentDetails::try_from(input)?;
        let dashboard = self.dashboard.lock()?;
        let errors = dashboard
            .validator(chrono::Local::now().date_naive())
            .validate(&details);
        Ok(field_errors(&errors))
    }

    /// Validate and append a new appointment.
    pub fn create_appointment(
        &self,
        input: FfiAppointmentInput,
    ) -> Result<FfiAppointment, DeskError> {
        let details = AppointmentDetails::try_from(input)?;
        let mut dashboard = self.dashboard.lock()?;
        ensure_valid(&dashboard, &details)?;
        Ok(dashboard.store_mut().create(details).into())
    }

    /// Validate and replace an existing appointment's fields.
    pub fn update_appointment(
        &self,
        id: String,
        input: FfiAppointmentInput,
    ) -> Result<FfiAppointment, DeskError> {
        let details = AppointmentDetails::try_from(input)?;
        let mut dashboard = self.dashboard.lock()?;
        ensure_valid(&dashboard, &details)?;
        Ok(dashboard.store_mut().update(&id, details)?.into())
    }

    /// Delete an appointment. Returns whether one was removed.
    pub fn delete_appointment(&self, id: String) -> Result<bool, DeskError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.delete(&id).removed)
    }

    /// Get an appointment by ID.
    pub fn get_appointment(&self, id: String) -> Result<Option<FfiAppointment>, DeskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.store().get(&id).cloned().map(Into::into))
    }

    /// List appointments matching `query` and `status` ("all" or a status).
    pub fn list_appointments(
        &self,
        query: String,
        status: String,
    ) -> Result<Vec<FfiAppointment>, DeskError> {
        let filter = ListFilter::new(query, status.parse()?);
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard
            .store()
            .list(&filter)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Summary card counts.
    pub fn get_summary(&self) -> Result<FfiSummary, DeskError> {
        let dashboard = self.dashboard.lock()?;
        Ok(dashboard.summary().into())
    }

    // =========================================================================
    // Form Session
    // =========================================================================

    /// Open a blank create form.
    pub fn open_create_form(&self) -> Result<FfiFormState, DeskError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.open_create_form().into())
    }

    /// Open an edit form for appointment `id`.
    pub fn open_edit_form(&self, id: String) -> Result<FfiFormState, DeskError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.open_edit_form(&id)?.into())
    }

    /// Apply one field's input to the open form.
    pub fn set_form_field(&self, field: String, value: String) -> Result<FfiFormState, DeskError> {
        let field: Field = field.parse()?;
        let mut dashboard = self.dashboard.lock()?;
        let form = dashboard
            .form_mut()
            .ok_or_else(|| DeskError::InvalidInput("no form is open".into()))?;
        form.set_field(field, &value)?;
        Ok((&*form).into())
    }

    /// Submit the open form.
    pub fn submit_form(&self) -> Result<FfiSubmitResult, DeskError> {
        let mut dashboard = self.dashboard.lock()?;
        let outcome = dashboard
            .submit_form()
            .ok_or_else(|| DeskError::InvalidInput("no form is open".into()))?;
        Ok(outcome.into())
    }

    /// Close the open form without submitting.
    pub fn close_form(&self) -> Result<bool, DeskError> {
        let mut dashboard = self.dashboard.lock()?;
        Ok(dashboard.close_form())
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export the listing for `query`/`status` as JSON.
    pub fn export_schedule_json(&self, query: String, status: String) -> Result<String, DeskError> {
        let filter = ListFilter::new(query, status.parse()?);
        let dashboard = self.dashboard.lock()?;
        let export = export::ScheduleExport::from_store(dashboard.store(), &filter);
        Ok(export.to_json()?)
    }

    /// Export the listing for `query`/`status` as CSV.
    pub fn export_schedule_csv(&self, query: String, status: String) -> Result<String, DeskError> {
        let filter = ListFilter::new(query, status.parse()?);
        let dashboard = self.dashboard.lock()?;
        let export = export::ScheduleExport::from_store(dashboard.store(), &filter);
        Ok(export.to_csv())
    }
}

fn ensure_valid(dashboard: &Dashboard, details: &AppointmentDetails) -> Result<(), DeskError> {
    let errors = dashboard
        .validator(chrono::Local::now().date_naive())
        .validate(details);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DeskError::Validation(errors.summary()))
    }
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn field_errors(errors: &ValidationErrors) -> Vec<FfiFieldError> {
    errors
        .iter()
        .map(|(field, message)| FfiFieldError {
            field: field.as_str().to_string(),
            message: message.to_string(),
        })
        .collect()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe desk options.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDeskConfig {
    pub reject_past_dates: bool,
    pub seed_sample_data: bool,
}

impl From<FfiDeskConfig> for DeskConfig {
    fn from(config: FfiDeskConfig) -> Self {
        DeskConfig {
            reject_past_dates: config.reject_past_dates,
            seed_sample_data: config.seed_sample_data,
        }
    }
}

impl From<DeskConfig> for FfiDeskConfig {
    fn from(config: DeskConfig) -> Self {
        Self {
            reject_past_dates: config.reject_past_dates,
            seed_sample_data: config.seed_sample_data,
        }
    }
}

/// FFI-safe candidate record. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiAppointmentInput {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service: String,
    pub status: String,
    pub notes: Option<String>,
}

impl TryFrom<FfiAppointmentInput> for AppointmentDetails {
    type Error = DeskError;

    fn try_from(input: FfiAppointmentInput) -> Result<Self, Self::Error> {
        let status = match input.status.as_str() {
            "" => Status::default(),
            other => other.parse()?,
        };
        Ok(AppointmentDetails {
            appointment_date: non_empty(&input.appointment_date)
                .map(models::parse_date)
                .transpose()?,
            appointment_time: non_empty(&input.appointment_time)
                .map(str::parse)
                .transpose()?,
            service: non_empty(&input.service).map(str::parse).transpose()?,
            patient_name: input.patient_name,
            email: input.email,
            phone: input.phone,
            status,
            notes: input.notes,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service: String,
    pub status: String,
    pub status_label: String,
    pub badge_variant: String,
    pub notes: Option<String>,
}

impl From<Appointment> for FfiAppointment {
    fn from(apt: Appointment) -> Self {
        let d = apt.details;
        Self {
            id: apt.id,
            patient_name: d.patient_name,
            email: d.email,
            phone: d.phone,
            appointment_date: d.appointment_date.map(|x| x.to_string()).unwrap_or_default(),
            appointment_time: d.appointment_time.map(String::from).unwrap_or_default(),
            service: d.service.map(|s| s.as_str().to_string()).unwrap_or_default(),
            status: d.status.as_str().to_string(),
            status_label: d.status.label().to_string(),
            badge_variant: d.status.badge_variant().to_string(),
            notes: d.notes,
        }
    }
}

/// FFI-safe field error.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}

/// FFI-safe summary counts.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSummary {
    pub total: u32,
    pub confirmed: u32,
    pub pending: u32,
    pub completed: u32,
}

impl From<Summary> for FfiSummary {
    fn from(summary: Summary) -> Self {
        Self {
            total: saturating_u32(summary.total),
            confirmed: saturating_u32(summary.confirmed),
            pending: saturating_u32(summary.pending),
            completed: saturating_u32(summary.completed),
        }
    }
}

/// FFI-safe notice.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiNotice {
    pub is_error: bool,
    pub title: String,
    pub description: String,
}

impl From<Notice> for FfiNotice {
    fn from(notice: Notice) -> Self {
        Self {
            is_error: notice.is_error(),
            title: notice.title,
            description: notice.description,
        }
    }
}

/// FFI-safe view of the open form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFormState {
    pub title: String,
    pub submit_label: String,
    pub editing_id: Option<String>,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub service: String,
    pub status: String,
    pub notes: Option<String>,
    pub errors: Vec<FfiFieldError>,
}

impl From<&AppointmentForm> for FfiFormState {
    fn from(form: &AppointmentForm) -> Self {
        let d = form.draft();
        Self {
            title: form.title().to_string(),
            submit_label: form.submit_label().to_string(),
            editing_id: match form.mode() {
                FormMode::Create => None,
                FormMode::Edit { id } => Some(id.clone()),
            },
            patient_name: d.patient_name.clone(),
            email: d.email.clone(),
            phone: d.phone.clone(),
            appointment_date: d.appointment_date.map(|x| x.to_string()).unwrap_or_default(),
            appointment_time: d.appointment_time.map(String::from).unwrap_or_default(),
            service: d.service.map(|s| s.as_str().to_string()).unwrap_or_default(),
            status: d.status.as_str().to_string(),
            notes: d.notes.clone(),
            errors: field_errors(form.errors()),
        }
    }
}

impl From<&mut AppointmentForm> for FfiFormState {
    fn from(form: &mut AppointmentForm) -> Self {
        (&*form).into()
    }
}

/// FFI-safe result of submitting the form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubmitResult {
    pub saved: Option<FfiAppointment>,
    pub errors: Vec<FfiFieldError>,
    pub notice: Option<FfiNotice>,
}

impl From<SubmitOutcome> for FfiSubmitResult {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Saved {
                appointment,
                notice,
            } => Self {
                saved: Some(appointment.into()),
                errors: Vec::new(),
                notice: Some(notice.into()),
            },
            SubmitOutcome::Rejected(errors) => Self {
                saved: None,
                errors: field_errors(&errors),
                notice: None,
            },
            SubmitOutcome::Failed(notice) => Self {
                saved: None,
                errors: Vec::new(),
                notice: Some(notice.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_saturate_at_u32_max() {
        let summary = Summary {
            total: usize::MAX,
            confirmed: 3,
            pending: 0,
            completed: 1,
        };
        let ffi = FfiSummary::from(summary);
        assert_eq!(ffi.total, u32::MAX);
        assert_eq!(ffi.confirmed, 3);
        assert_eq!(ffi.completed, 1);
    }
}

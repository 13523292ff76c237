//! Create/edit form for a single appointment.
//!
//! The form owns a working copy of the record and the errors currently shown
//! next to each field. Closing the form without submitting simply drops it.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{parse_date, Appointment, AppointmentDetails, Field, ParseError};
use crate::validation::{ValidationErrors, Validator};

/// Form input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid value for {field}: {source}")]
    InvalidValue {
        field: Field,
        #[source]
        source: ParseError,
    },
}

/// What a submitted form will do to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Valid; the caller should create or update with these details.
    Ready {
        mode: FormMode,
        details: AppointmentDetails,
    },
    /// Invalid; the form keeps its working copy and shows these errors.
    Rejected(ValidationErrors),
}

/// An open appointment form.
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    mode: FormMode,
    draft: AppointmentDetails,
    errors: ValidationErrors,
}

impl AppointmentForm {
    /// Blank form for a new appointment (status pending).
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: AppointmentDetails::default(),
            errors: ValidationErrors::new(),
        }
    }

    /// Form pre-filled from an existing appointment.
    pub fn edit(appointment: &Appointment) -> Self {
        Self {
            mode: FormMode::Edit {
                id: appointment.id.clone(),
            },
            draft: appointment.details.clone(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Working copy as currently entered.
    pub fn draft(&self) -> &AppointmentDetails {
        &self.draft
    }

    /// Errors from the last submit, minus fields edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create New Appointment",
            FormMode::Edit { .. } => "Edit Appointment",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Appointment",
            FormMode::Edit { .. } => "Update Appointment",
        }
    }

    /// Earliest date the date picker offers.
    pub fn min_date(today: NaiveDate) -> NaiveDate {
        today
    }

    /// Apply text input to one field and clear that field's error.
    ///
    /// Empty text unsets the date, time and service selections. Values that
    /// are not a valid date, slot, service or status are rejected and leave
    /// the form untouched.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        let invalid = move |source: ParseError| FormError::InvalidValue { field, source };
        let draft = &mut self.draft;

        match field {
            Field::PatientName => draft.patient_name = value.to_string(),
            Field::Email => draft.email = value.to_string(),
            Field::Phone => draft.phone = value.to_string(),
            Field::AppointmentDate => {
                draft.appointment_date = optional(value, parse_date).map_err(invalid)?
            }
            Field::AppointmentTime => {
                draft.appointment_time = optional(value, |v| v.parse()).map_err(invalid)?
            }
            Field::Service => draft.service = optional(value, |v| v.parse()).map_err(invalid)?,
            Field::Status => draft.status = value.parse().map_err(invalid)?,
            Field::Notes => {
                draft.notes = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
        }

        self.errors.clear(field);
        Ok(())
    }

    /// Validate the working copy.
    pub fn submit(&mut self, validator: &Validator) -> Submission {
        let errors = validator.validate(&self.draft);
        if errors.is_empty() {
            self.errors = ValidationErrors::new();
            Submission::Ready {
                mode: self.mode.clone(),
                details: self.draft.clone(),
            }
        } else {
            tracing::debug!(fields = ?errors.fields(), "Form rejected");
            self.errors = errors.clone();
            Submission::Rejected(errors)
        }
    }
}

fn optional<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

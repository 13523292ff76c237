//! Schedule export of the dashboard listing.

use serde::{Deserialize, Serialize};

use crate::models::Appointment;
use crate::store::{AppointmentStore, ListFilter, Summary};

/// Snapshot of a filtered appointment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleExport {
    /// Export timestamp
    pub exported_at: String,
    /// Filter the listing was taken with
    pub filter: ListFilter,
    /// Counts over the whole store, not just the listing
    pub summary: Summary,
    /// Matching appointments in insertion order
    pub appointments: Vec<Appointment>,
}

impl ScheduleExport {
    /// Export the appointments in `store` that pass `filter`.
    pub fn from_store(store: &AppointmentStore, filter: &ListFilter) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            filter: filter.clone(),
            summary: store.summarize(),
            appointments: store.list(filter).into_iter().cloned().collect(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("id,patient_name,email,phone,date,time,service,status,notes\n");

        for apt in &self.appointments {
            let d = &apt.details;
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{}\n",
                escape_csv(&apt.id),
                escape_csv(&d.patient_name),
                escape_csv(&d.email),
                escape_csv(&d.phone),
                d.appointment_date.map(|date| date.to_string()).unwrap_or_default(),
                d.appointment_time.map(|t| t.as_str()).unwrap_or(""),
                d.service.map(|s| s.as_str()).unwrap_or(""),
                d.status,
                escape_csv(d.notes.as_deref().unwrap_or("")),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

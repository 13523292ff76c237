use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Appointment Desk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,appointment_desk_core=debug"
}

/// Runtime options for a desk session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Reject appointment dates before today on submit, on top of the
    /// date picker's minimum
    pub reject_past_dates: bool,
    /// Start with the four demonstration appointments
    pub seed_sample_data: bool,
}

impl DeskConfig {
    /// Parse from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

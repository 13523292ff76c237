//! Dashboard summary cards.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Status};

/// Counts shown on the summary cards. Cancelled appointments only count
/// towards `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Summary {
    /// Count over a full, unfiltered collection.
    pub fn from_appointments<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> Self {
        appointments
            .into_iter()
            .fold(Summary::default(), |mut summary, apt| {
                summary.total += 1;
                match apt.status() {
                    Status::Confirmed => summary.confirmed += 1,
                    Status::Pending => summary.pending += 1,
                    Status::Completed => summary.completed += 1,
                    Status::Cancelled => {}
                }
                summary
            })
    }

    /// Appointments not in any of the three counted statuses.
    ///
    /// Saturates at zero for inconsistent counts, e.g. a hand-edited export.
    pub fn cancelled(&self) -> usize {
        self.total
            .saturating_sub(self.confirmed)
            .saturating_sub(self.pending)
            .saturating_sub(self.completed)
    }
}

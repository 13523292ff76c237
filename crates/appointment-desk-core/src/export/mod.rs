//! Export of the appointment schedule.

mod schedule;

pub use schedule::*;

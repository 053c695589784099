//! # medassist-ref-clinic
//!
//! Clinic-side state for the MedAssist dashboard, built around the lookup
//! engine:
//!
//! 1. **Appointment book** — booking against a fixed roster and slot list,
//!    with double-booking protection and cancel/complete transitions.
//! 2. **Medical history** — typed records (conditions, medications,
//!    allergies, procedures) with per-type field rules.
//! 3. **Treatment progress and feedback** — free-text updates and 1-5
//!    effectiveness ratings.
//!
//! Everything is held in memory for the lifetime of the value. Nothing is
//! persisted.

pub mod appointments;
pub mod history;
pub mod mock_data;
pub mod progress;
pub mod scenarios;

pub use appointments::AppointmentBook;
pub use history::MedicalHistory;
pub use progress::{FeedbackLog, ProgressLog};

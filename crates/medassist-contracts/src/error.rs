//! Error types shared by every MedAssist crate.
//!
//! All fallible operations return `MedAssistResult<T>`. Every variant is
//! recoverable at the call site; nothing here is meant to abort the process.

use thiserror::Error;

/// The unified error type for the MedAssist workspace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MedAssistError {
    /// Input was empty or otherwise unusable. The caller should show a
    /// corrective message and must not proceed.
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    /// A treatment-table lookup found no entry for the normalized key.
    #[error("no information available for '{key}'")]
    NotFound { key: String },

    /// A lookup table could not be loaded or failed load-time validation.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The requested doctor is not on the clinic roster.
    #[error("doctor '{doctor}' is not on the roster")]
    UnknownDoctor { doctor: String },

    /// The requested time is not one of the bookable slots.
    #[error("time slot '{time}' is not available")]
    UnavailableSlot { time: String },

    /// The doctor already has a scheduled appointment at that date and time.
    #[error("{doctor} is already booked on {date} at {time}")]
    SlotTaken {
        doctor: String,
        date: String,
        time: String,
    },

    /// No appointment exists with the given id.
    #[error("appointment '{id}' not found")]
    AppointmentNotFound { id: String },

    /// No medical-history record exists with the given id.
    #[error("medical record '{id}' not found")]
    RecordNotFound { id: String },

    /// An appointment status change that the lifecycle does not permit.
    #[error("appointment '{id}' cannot move from {from} to {to}")]
    InvalidTransition { id: String, from: String, to: String },

    /// A result could not be rendered for output.
    #[error("failed to encode output: {reason}")]
    Output { reason: String },

    /// A feedback rating outside the 1..=5 scale.
    #[error("rating {value} is outside the 1-5 scale")]
    InvalidRating { value: u8 },
}

/// Convenience alias used throughout the MedAssist crates.
pub type MedAssistResult<T> = Result<T, MedAssistError>;

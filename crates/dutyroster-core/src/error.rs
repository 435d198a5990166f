//! Error types for roster input

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating or converting roster input.
///
/// All variants are fatal and surface before any search begins.
/// An imperfect schedule is never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// The union of availability dates differs from the set of shift dates.
    #[error("date mismatch: only in shifts {only_in_shifts:?}, only in people {only_in_people:?}")]
    DateMismatch {
        only_in_shifts: Vec<NaiveDate>,
        only_in_people: Vec<NaiveDate>,
    },

    /// Two people share the same name.
    #[error("duplicate person: {0}")]
    DuplicatePerson(String),

    /// Two shifts share the same date.
    #[error("duplicate shift date: {0}")]
    DuplicateShift(NaiveDate),

    /// Ideal load must be a positive, finite number.
    #[error("invalid ideal load {value} for {name}")]
    InvalidIdealLoad { name: String, value: f64 },

    /// A person without any available date.
    #[error("{0} has no available dates")]
    NoAvailability(String),

    /// A weekday label that could not be recognized.
    #[error("unknown weekday label: {0:?}")]
    UnknownWeekday(String),

    /// A date string that could not be parsed.
    #[error("malformed date {value:?}: {reason}")]
    MalformedDate { value: String, reason: String },

    /// A slot snapshot taken from a schedule with a different shift count.
    #[error("snapshot covers {actual} shifts, schedule has {expected}")]
    SnapshotMismatch { expected: usize, actual: usize },

    /// No shifts or no people to plan with.
    #[error("problem has no shifts or no people")]
    EmptyProblem,
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

//! Duty roster core - scores and domain model
//!
//! This crate provides the fundamental types shared by the roster crates:
//! - [`PenaltyScore`] for hard/soft penalty magnitudes
//! - The domain model: [`Person`], [`Shift`], [`Schedule`] and the validated [`RosterProblem`]
//! - Calendar helpers for ISO weeks and weekday labels
//! - [`RosterError`] for invalid input

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    days_between, parse_date, parse_weekday, week_of, AvailabilityEntry, Person, PersonIdx,
    RosterProblem, Schedule, Shift, Slot, SlotSnapshot,
};
#[cfg(feature = "serde")]
pub use domain::{PersonInput, ProblemInput};
pub use error::{Result, RosterError};
pub use score::{PenaltyScore, ScoreLevel, ScoreParseError};

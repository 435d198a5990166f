//! Domain model: people, shifts and the schedule being searched.

mod calendar;
#[cfg(feature = "serde")]
mod input;
mod person;
mod problem;
mod schedule;
mod shift;

#[cfg(test)]
mod tests;

pub use calendar::{days_between, parse_date, parse_weekday, week_of};
#[cfg(feature = "serde")]
pub use input::{PersonInput, ProblemInput};
pub use person::{Person, DAYS_PER_MONTH};
pub use problem::{AvailabilityEntry, RosterProblem};
pub use schedule::{Schedule, SlotSnapshot};
pub use shift::{PersonIdx, Shift, Slot};

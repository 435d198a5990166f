//! Shared test fixtures for the duty roster crates.
//!
//! This crate provides data builders only. It does NOT depend on the scoring
//! or solver crates, so any of them can use it as a dev-dependency.
//!
//! - [`calendar`] - date helpers
//! - [`roster`] - people, schedules and generated problem instances
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! dutyroster-test = { workspace = true }
//! ```

pub mod calendar;
pub mod roster;

pub use calendar::{date, weekly_dates};
pub use roster::{feasible_problem, person, schedule_of, tight_problem};

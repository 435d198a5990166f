//! Duty roster solver
//!
//! Assigns two people to every shift date so that nobody serves twice in
//! one ISO week, everybody serves at least once, and workload and spacing
//! follow each person's ideal monthly load.
//!
//! # Example
//!
//! ```rust
//! use dutyroster::prelude::*;
//!
//! let score = PenaltyScore::of(0, 4.25);
//! assert!(score.is_feasible());
//! assert_eq!(score.to_string(), "0hard/4.25soft");
//! ```

#[cfg(feature = "console")]
pub mod console;
mod error;
mod report;
mod solve;

pub use error::SolveError;
pub use report::{summarize, PersonSummary};
#[cfg(feature = "serde")]
pub use solve::solve_input;
pub use solve::{solve, SolveOutcome};

// Domain and score types
pub use dutyroster_core::{
    parse_date, parse_weekday, AvailabilityEntry, PenaltyScore, Person, RosterError,
    RosterProblem, Schedule, Shift, Slot,
};
#[cfg(feature = "serde")]
pub use dutyroster_core::{PersonInput, ProblemInput};

// Scoring
pub use dutyroster_scoring::{ConstraintWeights, RosterConstraints, ScoreExplanation};

// Configuration
pub use dutyroster_config::{AcceptorConfig, ConfigError, SolverConfig};

// Solver
pub use dutyroster_solver::{Solver, SolverResult, SolverStats};

pub mod prelude {
    pub use super::{solve, PenaltyScore, Person, RosterProblem, SolveOutcome, SolverConfig};
}

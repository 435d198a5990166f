//! Termination conditions for the search.
//!
//! A time limit always applies; the other conditions end the search earlier.

mod best_score;
mod composite;
mod step_count;
mod time;
mod unimproved;


use std::fmt::Debug;
use std::time::Duration;

use crate::scope::SolverScope;

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Trait for determining when to stop solving.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool;

    /// Wall-clock limit, if this termination has one.
    ///
    /// Time-dependent acceptors scale their tolerance by the fraction spent.
    fn time_limit(&self) -> Option<Duration> {
        None
    }
}

//! Acceptors for local search move acceptance.
//!
//! Acceptors determine whether a move should be accepted based on
//! comparing the resulting score with the previous step's score. Scores are
//! penalties, so lower is better.

mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;

use std::fmt::Debug;

use dutyroster_core::PenaltyScore;

use crate::scope::SolverRng;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
///
/// Every acceptor accepts moves that do not worsen the last step score;
/// they differ in how they treat worsening moves.
pub trait Acceptor: Send + Debug {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(
        &mut self,
        last_step_score: PenaltyScore,
        move_score: PenaltyScore,
        rng: &mut SolverRng,
    ) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: PenaltyScore) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step starts, with the fraction of the time limit spent.
    fn step_started(&mut self, _time_gradient: f64) {}

    /// Called when a step ends with the resulting step score.
    fn step_ended(&mut self, _step_score: PenaltyScore) {}
}

#[cfg(test)]
mod tests;

//! Hill climbing acceptor.

use dutyroster_core::PenaltyScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Hill climbing acceptor - accepts only moves that do not worsen the score.
///
/// Sideways moves are accepted so the search can drift across plateaus,
/// but it still gets stuck in local optima.
///
/// # Example
///
/// ```
/// use dutyroster_solver::HillClimbingAcceptor;
///
/// let acceptor = HillClimbingAcceptor::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn name(&self) -> &'static str {
        "Hill Climbing"
    }

    fn is_accepted(
        &mut self,
        last_step_score: PenaltyScore,
        move_score: PenaltyScore,
        _rng: &mut SolverRng,
    ) -> bool {
        move_score <= last_step_score
    }
}

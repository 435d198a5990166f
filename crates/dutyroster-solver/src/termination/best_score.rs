//! Best score termination.

use dutyroster_core::PenaltyScore;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the best score reaches `limit` or better.
#[derive(Debug, Clone)]
pub struct BestScoreTermination {
    limit: PenaltyScore,
}

impl BestScoreTermination {
    pub fn new(limit: PenaltyScore) -> Self {
        Self { limit }
    }
}

impl Termination for BestScoreTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope
            .best_score()
            .is_some_and(|best| best <= self.limit)
    }
}

//! Step count termination.

use super::Termination;
use crate::scope::SolverScope;
use crate::solver::SolverStatus;

/// Terminates after a number of local search steps.
///
/// Construction placements are not solver steps, and the limit is only
/// checked while the solver is searching.
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.status() == SolverStatus::Searching
            && solver_scope.total_step_count() >= self.limit
    }
}

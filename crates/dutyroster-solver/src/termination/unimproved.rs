//! Termination based on lack of improvement.

use super::Termination;
use crate::scope::SolverScope;
use crate::solver::SolverStatus;

/// Terminates if the best score has not improved for a number of steps.
///
/// Only local search steps count, and only while the solver is searching,
/// so a construction phase always runs to completion.
///
/// # Example
///
/// ```
/// use dutyroster_solver::UnimprovedStepCountTermination;
///
/// // Terminate after 100 steps without improvement
/// let term = UnimprovedStepCountTermination::new(100);
/// ```
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        solver_scope.status() == SolverStatus::Searching
            && solver_scope.unimproved_step_count() >= self.limit
    }
}

//! Solver phases
//!
//! Phases run in sequence on the same solver scope:
//! - ConstructionPhase: fills empty slots greedily
//! - LocalSearchPhase: improves the constructed schedule

use std::fmt::Debug;

use crate::scope::SolverScope;
use crate::solver::SolverStatus;

/// A phase of the solving process.
///
/// The phase modifies the working schedule in the solver scope and updates
/// the best solution when it finds an improvement.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>, phase_index: usize);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;

    /// Solver status while this phase runs.
    fn status(&self) -> SolverStatus {
        SolverStatus::Searching
    }
}

//! Composite termination.

use std::time::Duration;

use super::Termination;
use crate::scope::SolverScope;

/// Combines terminations with OR logic: terminates when ANY child does.
///
/// # Examples
///
/// ```
/// use dutyroster_solver::{OrTermination, StepCountTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR 1000 steps
/// let termination = OrTermination::new()
///     .with(TimeTermination::seconds(30))
///     .with(StepCountTermination::new(1000));
/// assert_eq!(termination.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct OrTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl OrTermination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child termination.
    pub fn with(mut self, termination: impl Termination + 'static) -> Self {
        self.terminations.push(Box::new(termination));
        self
    }

    pub fn len(&self) -> usize {
        self.terminations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminations.is_empty()
    }
}

impl Termination for OrTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_>) -> bool {
        self.terminations
            .iter()
            .any(|t| t.is_terminated(solver_scope))
    }

    /// The shortest time limit among the children.
    fn time_limit(&self) -> Option<Duration> {
        self.terminations.iter().filter_map(|t| t.time_limit()).min()
    }
}

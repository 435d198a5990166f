//! Phase-level scope.

use std::time::Duration;

use dutyroster_core::PenaltyScore;
use dutyroster_scoring::ScoreDirector;

use super::SolverScope;
use crate::stats::PhaseStats;

/// Scope for a single phase of solving.
///
/// # Lifetimes
/// * `'t` - Lifetime of the termination borrowed by the solver scope
/// * `'a` - Lifetime of the solver scope reference
pub struct PhaseScope<'t, 'a> {
    solver_scope: &'a mut SolverScope<'t>,
    starting_score: PenaltyScore,
    stats: PhaseStats,
}

impl<'t, 'a> PhaseScope<'t, 'a> {
    pub fn new(
        solver_scope: &'a mut SolverScope<'t>,
        phase_index: usize,
        phase_type: &'static str,
    ) -> Self {
        let starting_score = solver_scope.current_score();
        Self {
            solver_scope,
            starting_score,
            stats: PhaseStats::new(phase_index, phase_type),
        }
    }

    pub fn phase_index(&self) -> usize {
        self.stats.phase_index
    }

    /// Working score when this phase started.
    pub fn starting_score(&self) -> PenaltyScore {
        self.starting_score
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.stats.step_count
    }

    /// Counts a step in both the phase and the solver.
    pub fn increment_step_count(&mut self) -> u64 {
        self.stats.record_step();
        self.solver_scope.increment_step_count();
        self.stats.step_count
    }

    /// Counts a step of this phase only. Construction placements use this,
    /// so the solver's step and stall limits see local search steps alone.
    pub fn increment_phase_step_count(&mut self) -> u64 {
        self.stats.record_step();
        self.stats.step_count
    }

    /// Counts an evaluated move in both the phase and the solver.
    pub fn record_move(&mut self, accepted: bool) {
        self.stats.record_move(accepted);
        self.solver_scope.stats_mut().record_move(accepted);
    }

    pub fn stats(&self) -> &PhaseStats {
        &self.stats
    }

    pub fn solver_scope(&self) -> &SolverScope<'t> {
        self.solver_scope
    }

    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<'t> {
        self.solver_scope
    }

    pub fn score_director(&self) -> &ScoreDirector {
        self.solver_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut ScoreDirector {
        self.solver_scope.score_director_mut()
    }

    pub fn update_best_solution(&mut self) -> bool {
        self.solver_scope.update_best_solution()
    }
}

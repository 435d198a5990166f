//! Solver-level scope.

use std::time::{Duration, Instant};

use dutyroster_core::{PenaltyScore, Schedule, SlotSnapshot};
use dutyroster_scoring::ScoreDirector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::error;

use crate::solver::SolverStatus;
use crate::stats::SolverStats;
use crate::termination::Termination;

/// Pseudo-random source of a solve; seeded, so runs are reproducible.
pub type SolverRng = ChaCha8Rng;

/// Top-level scope for one solve.
///
/// Owns the score director (and with it the working schedule), the best
/// snapshot seen so far, the random source and the counters that
/// terminations read.
pub struct SolverScope<'t> {
    score_director: ScoreDirector,
    best_snapshot: Option<SlotSnapshot>,
    best_score: Option<PenaltyScore>,
    rng: SolverRng,
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
    total_step_count: u64,
    last_improvement_step: u64,
    status: SolverStatus,
    stats: SolverStats,
    termination: Option<&'t dyn Termination>,
}

impl<'t> SolverScope<'t> {
    pub fn new(score_director: ScoreDirector, seed: u64) -> Self {
        Self {
            score_director,
            best_snapshot: None,
            best_score: None,
            rng: SolverRng::seed_from_u64(seed),
            start_time: None,
            time_limit: None,
            total_step_count: 0,
            last_improvement_step: 0,
            status: SolverStatus::NotStarted,
            stats: SolverStats::default(),
            termination: None,
        }
    }

    /// Terminates phases once `termination` says so.
    pub fn with_termination(mut self, termination: &'t dyn Termination) -> Self {
        self.time_limit = termination.time_limit();
        self.termination = Some(termination);
        self
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.last_improvement_step = 0;
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Fraction of the time limit spent, in `[0, 1]`; 0 without a limit.
    pub fn time_gradient(&self) -> f64 {
        match self.time_limit {
            Some(limit) if !limit.is_zero() => {
                (self.elapsed().as_secs_f64() / limit.as_secs_f64()).min(1.0)
            }
            _ => 0.0,
        }
    }

    pub fn should_terminate(&self) -> bool {
        self.termination.is_some_and(|t| t.is_terminated(self))
    }

    pub fn score_director(&self) -> &ScoreDirector {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut ScoreDirector {
        &mut self.score_director
    }

    /// Borrows the director and the random source at once.
    pub fn director_and_rng(&mut self) -> (&ScoreDirector, &mut SolverRng) {
        (&self.score_director, &mut self.rng)
    }

    pub fn working_solution(&self) -> &Schedule {
        self.score_director.working_solution()
    }

    pub fn current_score(&self) -> PenaltyScore {
        self.score_director.score()
    }

    pub fn best_score(&self) -> Option<PenaltyScore> {
        self.best_score
    }

    /// Snapshots the working schedule if it beats the best so far.
    ///
    /// Returns true on a new best.
    pub fn update_best_solution(&mut self) -> bool {
        let current = self.score_director.score();
        let is_better = match self.best_score {
            None => true,
            Some(best) => current < best,
        };
        if is_better {
            self.best_snapshot = Some(self.score_director.snapshot());
            self.best_score = Some(current);
            self.last_improvement_step = self.total_step_count;
            self.stats.record_best_update();
        }
        is_better
    }

    pub fn rng(&mut self) -> &mut SolverRng {
        &mut self.rng
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.stats.record_step();
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    /// Steps taken since the best score last improved.
    pub fn unimproved_step_count(&self) -> u64 {
        self.total_step_count - self.last_improvement_step
    }

    pub fn status(&self) -> SolverStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SolverStatus) {
        self.status = status;
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    /// Restores the best snapshot into the director and returns the best
    /// schedule, its score and the statistics.
    pub fn into_best(mut self) -> (Schedule, PenaltyScore, SolverStats) {
        if let Some(snapshot) = self.best_snapshot.take() {
            if let Err(err) = self.score_director.restore(&snapshot) {
                error!(event = "restore_failed", error = %err);
            }
        }
        self.stats.score_calculations = self.score_director.calculation_count();
        self.stats.stop();
        let score = self.score_director.score();
        (self.score_director.into_working_solution(), score, self.stats)
    }
}

//! Solver implementation.

use std::fmt::Debug;

use dutyroster_config::{ConfigError, SolverConfig};
use dutyroster_core::{PenaltyScore, Schedule};
use dutyroster_scoring::{RosterConstraints, ScoreDirector};
use tracing::info;

use crate::builder::{build_constraints, build_selector, AcceptorBuilder, TerminationBuilder};
use crate::construction::ConstructionPhase;
use crate::localsearch::{AcceptedCountForager, LocalSearchPhase};
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::stats::SolverStats;
use crate::termination::Termination;

/// Lifecycle of one solve: `NotStarted → Constructing → Searching → Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    NotStarted,
    Constructing,
    Searching,
    Terminated,
}

/// Best schedule found by one solve.
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub schedule: Schedule,
    pub score: PenaltyScore,
    pub stats: SolverStats,
    /// Index of the worker that produced this result.
    pub worker: usize,
    pub seed: u64,
}

/// Runs phases in sequence on one private working schedule.
///
/// # Example
///
/// ```
/// use dutyroster_scoring::RosterConstraints;
/// use dutyroster_solver::{ConstructionPhase, Solver, StepCountTermination};
///
/// let solver = Solver::new(RosterConstraints::default(), StepCountTermination::new(100))
///     .with_phase(ConstructionPhase::new())
///     .with_seed(7);
/// assert_eq!(solver.seed(), 7);
/// ```
pub struct Solver {
    constraints: RosterConstraints,
    phases: Vec<Box<dyn Phase>>,
    termination: Box<dyn Termination>,
    seed: u64,
    worker: usize,
}

impl Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("phases", &self.phases)
            .field("termination", &self.termination)
            .field("seed", &self.seed)
            .field("worker", &self.worker)
            .finish()
    }
}

impl Solver {
    /// Creates a solver with no phases.
    pub fn new(constraints: RosterConstraints, termination: impl Termination + 'static) -> Self {
        Self {
            constraints,
            phases: Vec::new(),
            termination: Box::new(termination),
            seed: 0,
            worker: 0,
        }
    }

    /// Builds construction followed by local search, as configured.
    pub fn from_config(config: &SolverConfig, seed: u64) -> Result<Self, ConfigError> {
        let acceptor = AcceptorBuilder::build(&config.local_search.acceptor)?;
        let local_search = LocalSearchPhase::new(
            build_selector(config),
            acceptor,
            Box::new(AcceptedCountForager::new(1)),
            None,
        );
        let termination = TerminationBuilder::build(&config.termination)?;

        Ok(Self::new(build_constraints(config), termination)
            .with_phase(ConstructionPhase::new())
            .with_phase(local_search)
            .with_seed(seed))
    }

    pub fn with_phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Tags the results and log events of this solver with `worker`.
    pub fn with_worker(mut self, worker: usize) -> Self {
        self.worker = worker;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn constraints(&self) -> &RosterConstraints {
        &self.constraints
    }

    /// Solves `schedule` and returns the best snapshot observed.
    ///
    /// Already assigned slots are kept as the starting point. Running out
    /// of time is the normal way to finish, never an error.
    pub fn solve(&mut self, schedule: Schedule) -> SolverResult {
        let director = ScoreDirector::new(schedule, self.constraints);
        let mut solver_scope =
            SolverScope::new(director, self.seed).with_termination(&*self.termination);

        info!(
            event = "solve_start",
            worker = self.worker,
            seed = self.seed,
            shift_count = solver_scope.working_solution().shift_count(),
            person_count = solver_scope.working_solution().person_count(),
            score = %solver_scope.current_score(),
        );

        solver_scope.start_solving();
        solver_scope.update_best_solution();

        for (index, phase) in self.phases.iter_mut().enumerate() {
            if solver_scope.should_terminate() {
                break;
            }
            solver_scope.set_status(phase.status());
            phase.solve(&mut solver_scope, index);
        }
        solver_scope.set_status(SolverStatus::Terminated);

        let (schedule, score, stats) = solver_scope.into_best();
        info!(
            event = "solve_end",
            worker = self.worker,
            score = %score,
            steps = stats.step_count,
            moves_evaluated = stats.moves_evaluated,
            moves_accepted = stats.moves_accepted,
            best_updates = stats.best_updates,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        SolverResult {
            schedule,
            score,
            stats,
            worker: self.worker,
            seed: self.seed,
        }
    }
}

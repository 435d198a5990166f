//! Solve entry points.

use std::fmt;

use dutyroster_config::SolverConfig;
use dutyroster_core::{PenaltyScore, RosterProblem, Schedule};
use dutyroster_scoring::ScoreExplanation;
use dutyroster_solver::builder::build_constraints;
use dutyroster_solver::{solve_parallel, SolverStats};
use tracing::{debug, info};

use crate::error::SolveError;
use crate::report::{summarize, PersonSummary};

/// Best schedule found, with everything needed to report on it.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub schedule: Schedule,
    pub score: PenaltyScore,
    /// Per-constraint breakdown of `score`.
    pub explanation: ScoreExplanation,
    /// One summary per person, in input order.
    pub people: Vec<PersonSummary>,
    /// Statistics summed over all workers.
    pub stats: SolverStats,
    /// Worker that found the schedule and its seed.
    pub worker: usize,
    pub seed: u64,
}

impl SolveOutcome {
    /// Returns true if no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    /// Summary of the person called `name`.
    pub fn person(&self, name: &str) -> Option<&PersonSummary> {
        self.people.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.schedule)?;
        writeln!(f)?;
        write!(f, "{}", self.explanation)?;
        writeln!(f)?;
        for person in &self.people {
            writeln!(f, "{person}")?;
        }
        Ok(())
    }
}

/// Solves `problem` under `config`.
///
/// Returns the best schedule seen before the deadline. A schedule with hard
/// violations is still a successful outcome; inspect
/// [`SolveOutcome::is_feasible`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dutyroster::{solve, Person, RosterProblem, SolverConfig};
///
/// let dates: Vec<NaiveDate> = (0..4)
///     .map(|w| NaiveDate::from_ymd_opt(2026, 1, 7 + 7 * w).unwrap())
///     .collect();
/// let people = ["Anna", "Bert", "Carla"]
///     .into_iter()
///     .map(|name| Person::new(name, 1.0).with_available_dates(dates.iter().copied()))
///     .collect();
/// let problem = RosterProblem::new(dates, people).unwrap();
///
/// let config = SolverConfig::new()
///     .with_random_seed(1)
///     .with_step_count_limit(200)
///     .with_termination_seconds(10);
/// let outcome = solve(&problem, &config).unwrap();
/// assert!(outcome.is_feasible());
/// ```
pub fn solve(problem: &RosterProblem, config: &SolverConfig) -> Result<SolveOutcome, SolveError> {
    let result = solve_parallel(problem, config)?;
    let best = result.best;

    let constraints = build_constraints(config);
    let explanation = constraints.explain(&best.schedule);
    let people = summarize(&best.schedule, config.planning.months);

    for person in &people {
        debug!(
            event = "person_summary",
            name = %person.name,
            assigned = person.assigned,
            ideal = person.ideal,
            min_gap_days = ?person.min_gap_days,
            max_gap_days = ?person.max_gap_days,
        );
    }
    info!(
        event = "roster_solved",
        score = %best.score,
        feasible = best.score.is_feasible(),
        unassigned_slots = best.schedule.unassigned_slot_count(),
    );

    Ok(SolveOutcome {
        score: best.score,
        explanation,
        people,
        stats: result.total_stats,
        worker: best.worker,
        seed: best.seed,
        schedule: best.schedule,
    })
}

/// Validates raw input and solves it.
#[cfg(feature = "serde")]
pub fn solve_input(
    input: dutyroster_core::ProblemInput,
    config: &SolverConfig,
) -> Result<SolveOutcome, SolveError> {
    let problem = RosterProblem::try_from(input)?;
    solve(&problem, config)
}

//! Independent restarts on a rayon pool.
//!
//! Each worker owns its schedule copy, director and random source. Workers
//! share nothing while searching; their best results are compared once
//! they all finish.

use dutyroster_config::{ConfigError, SolverConfig};
use dutyroster_core::{PenaltyScore, RosterProblem};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::solver::{Solver, SolverResult};
use crate::stats::SolverStats;

/// Outcome of [`solve_parallel`].
#[derive(Debug, Clone)]
pub struct ParallelResult {
    /// Result of the best worker.
    pub best: SolverResult,
    /// Best score of every worker, by worker index.
    pub worker_scores: Vec<PenaltyScore>,
    /// Statistics summed over all workers.
    pub total_stats: SolverStats,
}

/// Seed of `worker`, derived from the base seed.
///
/// Worker 0 uses the base seed itself, so a single-worker run with a
/// configured seed reproduces exactly.
pub fn worker_seed(base: u64, worker: usize) -> u64 {
    base.wrapping_add((worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Logs dates with fewer than two available people.
fn log_availability(problem: &RosterProblem) {
    for entry in problem.availability_overview() {
        debug!(
            event = "availability",
            date = %entry.date,
            available = entry.available.len(),
            people = ?entry.available,
        );
        if entry.available.len() < 2 {
            warn!(
                event = "availability",
                date = %entry.date,
                available = entry.available.len(),
                "fewer than two people available; the shift cannot be fully staffed",
            );
        }
    }
}

/// Solves `problem` with `config.worker_count` isolated restarts.
///
/// The best result wins; equal scores go to the lower worker index. Only
/// an invalid configuration is an error.
pub fn solve_parallel(
    problem: &RosterProblem,
    config: &SolverConfig,
) -> Result<ParallelResult, ConfigError> {
    config.validate()?;
    log_availability(problem);

    let base_seed = config
        .random_seed
        .unwrap_or_else(|| rand::rng().random::<u64>());
    let workers = config.worker_count;
    info!(
        event = "parallel_start",
        workers = workers,
        base_seed = base_seed,
    );

    let run = |worker: usize| -> Result<SolverResult, ConfigError> {
        let mut solver =
            Solver::from_config(config, worker_seed(base_seed, worker))?.with_worker(worker);
        Ok(solver.solve(problem.to_schedule()))
    };

    let results: Vec<SolverResult> = if workers == 1 {
        vec![run(0)?]
    } else {
        (0..workers)
            .into_par_iter()
            .map(run)
            .collect::<Result<Vec<_>, _>>()?
    };

    let worker_scores: Vec<PenaltyScore> = results.iter().map(|r| r.score).collect();
    let mut total_stats = SolverStats::default();
    for result in &results {
        total_stats.merge(&result.stats);
    }

    let best = results
        .into_iter()
        .min_by_key(|r| (r.score, r.worker))
        .ok_or_else(|| ConfigError::Invalid("worker_count must be at least 1".to_string()))?;

    info!(
        event = "parallel_end",
        best_worker = best.worker,
        score = %best.score,
        moves_evaluated = total_stats.moves_evaluated,
        best_updates = total_stats.best_updates,
    );

    Ok(ParallelResult {
        best,
        worker_scores,
        total_stats,
    })
}

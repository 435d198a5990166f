//! Counters for one solve, one phase, or a set of parallel workers.

use std::time::{Duration, Instant};

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}

/// Statistics of one worker, or of several after [`merge`](Self::merge).
///
/// # Example
///
/// ```
/// use dutyroster_solver::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    started: Option<Instant>,
    frozen: Option<Duration>,
    /// Local search steps; construction placements are not solver steps.
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
    /// Score calculations reported by the score director.
    pub score_calculations: u64,
    /// Times a new best schedule was recorded.
    pub best_updates: u64,
    /// Workers folded into these counters.
    pub workers: usize,
}

impl SolverStats {
    /// Starts the clock for a single worker.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = None;
        self.workers = 1;
    }

    pub fn stop(&mut self) {
        self.frozen = Some(self.elapsed());
    }

    /// Wall time since [`start`](Self::start), frozen by [`stop`](Self::stop).
    pub fn elapsed(&self) -> Duration {
        match (self.frozen, self.started) {
            (Some(frozen), _) => frozen,
            (None, Some(started)) => started.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        self.moves_accepted += u64::from(accepted);
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_best_update(&mut self) {
        self.best_updates += 1;
    }

    /// Folds another worker's counters into these. Workers run side by
    /// side, so the elapsed time is the longer of the two.
    pub fn merge(&mut self, other: &SolverStats) {
        self.step_count += other.step_count;
        self.moves_evaluated += other.moves_evaluated;
        self.moves_accepted += other.moves_accepted;
        self.score_calculations += other.score_calculations;
        self.best_updates += other.best_updates;
        self.workers += other.workers;
        self.frozen = Some(self.elapsed().max(other.elapsed()));
    }

    pub fn moves_per_second(&self) -> f64 {
        per_second(self.moves_evaluated, self.elapsed())
    }

    pub fn acceptance_rate(&self) -> f64 {
        ratio(self.moves_accepted, self.moves_evaluated)
    }
}

/// Statistics of a single phase run.
#[derive(Debug)]
pub struct PhaseStats {
    pub phase_index: usize,
    pub phase_type: &'static str,
    started: Instant,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
}

impl PhaseStats {
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            started: Instant::now(),
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        self.moves_accepted += u64::from(accepted);
    }

    /// Whole moves per second, for log fields.
    pub fn moves_per_second(&self) -> u64 {
        per_second(self.moves_evaluated, self.elapsed()) as u64
    }

    pub fn acceptance_rate(&self) -> f64 {
        ratio(self.moves_accepted, self.moves_evaluated)
    }
}

//! Foragers for local search move selection
//!
//! Foragers collect accepted moves during a step and select the
//! best one to apply.

use std::fmt::Debug;

use dutyroster_core::PenaltyScore;

/// Trait for collecting and selecting moves in local search.
///
/// Foragers only see move indices into the step's candidate list, so
/// moves never need to be cloned.
pub trait LocalSearchForager: Send + Debug {
    /// Called at the start of each step to reset state.
    fn step_started(&mut self);

    /// Adds the index of an accepted move with its resulting score.
    fn add_move_index(&mut self, index: usize, score: PenaltyScore);

    /// Returns true if the forager has collected enough moves and
    /// wants to stop evaluating more.
    fn is_quit_early(&self) -> bool;

    /// Picks the best collected move index; None if nothing was accepted.
    fn pick_move_index(&mut self) -> Option<(usize, PenaltyScore)>;
}

/// A forager that collects a limited number of accepted moves.
///
/// Once the limit is reached, it quits early. It picks the lowest-penalty
/// move among those collected, preferring the earliest on ties.
#[derive(Debug, Clone)]
pub struct AcceptedCountForager {
    accepted_count_limit: usize,
    accepted_moves: Vec<(usize, PenaltyScore)>,
}

impl AcceptedCountForager {
    /// Creates a forager that stops after `accepted_count_limit` accepted moves.
    pub fn new(accepted_count_limit: usize) -> Self {
        Self {
            accepted_count_limit: accepted_count_limit.max(1),
            accepted_moves: Vec::new(),
        }
    }
}

impl LocalSearchForager for AcceptedCountForager {
    fn step_started(&mut self) {
        self.accepted_moves.clear();
    }

    fn add_move_index(&mut self, index: usize, score: PenaltyScore) {
        self.accepted_moves.push((index, score));
    }

    fn is_quit_early(&self) -> bool {
        self.accepted_moves.len() >= self.accepted_count_limit
    }

    fn pick_move_index(&mut self) -> Option<(usize, PenaltyScore)> {
        let mut best: Option<(usize, PenaltyScore)> = None;
        for &(index, score) in &self.accepted_moves {
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        self.accepted_moves.clear();
        best
    }
}

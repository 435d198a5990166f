//! Late acceptance acceptor.

use dutyroster_core::PenaltyScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Late acceptance acceptor - accepts moves that improve on a historical score.
///
/// Maintains a circular buffer of recent step scores and accepts a move that
/// is no worse than the last step or than the score from N steps ago.
///
/// # Example
///
/// ```
/// use dutyroster_solver::LateAcceptanceAcceptor;
///
/// let acceptor = LateAcceptanceAcceptor::new(400);
/// ```
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    late_acceptance_size: usize,
    score_history: Vec<Option<PenaltyScore>>,
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    /// Creates a new late acceptance acceptor keeping
    /// `late_acceptance_size` historical scores (at least one).
    pub fn new(late_acceptance_size: usize) -> Self {
        let late_acceptance_size = late_acceptance_size.max(1);
        Self {
            late_acceptance_size,
            score_history: vec![None; late_acceptance_size],
            current_index: 0,
        }
    }

    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
    }
}

impl Default for LateAcceptanceAcceptor {
    fn default() -> Self {
        Self::new(400)
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn name(&self) -> &'static str {
        "Late Acceptance"
    }

    fn is_accepted(
        &mut self,
        last_step_score: PenaltyScore,
        move_score: PenaltyScore,
        _rng: &mut SolverRng,
    ) -> bool {
        if move_score <= last_step_score {
            return true;
        }
        match self.score_history[self.current_index] {
            Some(late_score) => move_score <= late_score,
            None => true,
        }
    }

    fn phase_started(&mut self, initial_score: PenaltyScore) {
        for slot in &mut self.score_history {
            *slot = Some(initial_score);
        }
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: PenaltyScore) {
        self.score_history[self.current_index] = Some(step_score);
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}

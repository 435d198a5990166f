//! Simulated annealing acceptor.

use dutyroster_core::{PenaltyScore, ScoreLevel};
use rand::Rng;

use super::Acceptor;
use crate::scope::SolverRng;

const LEVELS: [ScoreLevel; 2] = [ScoreLevel::Hard, ScoreLevel::Soft];

/// Simulated annealing acceptor - accepts worsening moves with a
/// temperature-based probability.
///
/// Each score level has its own starting temperature. The temperature
/// cools linearly with the fraction of the time limit spent, reaching zero
/// at the deadline, where only non-worsening moves are accepted.
///
/// The acceptance chance of a worsening move is the product over levels of
/// `exp(-delta / temperature)`.
///
/// # Example
///
/// ```
/// use dutyroster_core::PenaltyScore;
/// use dutyroster_solver::SimulatedAnnealingAcceptor;
///
/// let acceptor = SimulatedAnnealingAcceptor::new(PenaltyScore::of(1, 5.0));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: PenaltyScore,
    time_gradient: f64,
}

impl SimulatedAnnealingAcceptor {
    pub fn new(starting_temperature: PenaltyScore) -> Self {
        Self {
            starting_temperature,
            time_gradient: 0.0,
        }
    }

    /// Current temperature of `level`.
    pub fn temperature(&self, level: ScoreLevel) -> f64 {
        self.starting_temperature.level(level) * (1.0 - self.time_gradient)
    }

    /// Probability of accepting a move from `last` to `candidate`.
    pub fn acceptance_chance(&self, last: PenaltyScore, candidate: PenaltyScore) -> f64 {
        let mut chance = 1.0;
        for level in LEVELS {
            let delta = candidate.level(level) - last.level(level);
            if delta <= 0.0 {
                continue;
            }
            let temperature = self.temperature(level);
            if temperature <= 0.0 {
                return 0.0;
            }
            chance *= (-delta / temperature).exp();
        }
        chance
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(PenaltyScore::of(1, 5.0))
    }
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn is_accepted(
        &mut self,
        last_step_score: PenaltyScore,
        move_score: PenaltyScore,
        rng: &mut SolverRng,
    ) -> bool {
        if move_score <= last_step_score {
            return true;
        }
        let chance = self.acceptance_chance(last_step_score, move_score);
        chance > 0.0 && rng.random::<f64>() < chance
    }

    fn phase_started(&mut self, _initial_score: PenaltyScore) {
        self.time_gradient = 0.0;
    }

    fn step_started(&mut self, time_gradient: f64) {
        self.time_gradient = time_gradient.clamp(0.0, 1.0);
    }
}

//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between configuration types and
//! the actual solver implementation.

use dutyroster_config::{AcceptorConfig, ConfigError, SolverConfig, TerminationConfig};
use dutyroster_scoring::{ConstraintWeights, RosterConstraints};

use crate::localsearch::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
use crate::selector::RandomMoveSelector;
use crate::termination::{
    BestScoreTermination, OrTermination, StepCountTermination, TimeTermination,
    UnimprovedStepCountTermination,
};

/// Builder for constructing acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    /// Builds an acceptor from configuration.
    pub fn build(config: &AcceptorConfig) -> Result<Box<dyn Acceptor>, ConfigError> {
        Ok(match config {
            AcceptorConfig::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            AcceptorConfig::LateAcceptance(la_config) => {
                Box::new(LateAcceptanceAcceptor::new(la_config.late_acceptance_size))
            }
            AcceptorConfig::SimulatedAnnealing(sa_config) => {
                Box::new(SimulatedAnnealingAcceptor::new(sa_config.starting_temperature()?))
            }
        })
    }
}

/// Builder for constructing terminations from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Builds the time limit plus every optional limit that is set.
    pub fn build(config: &TerminationConfig) -> Result<OrTermination, ConfigError> {
        let mut termination = OrTermination::new().with(TimeTermination::new(config.time_limit()));
        if let Some(steps) = config.step_count_limit {
            termination = termination.with(StepCountTermination::new(steps));
        }
        if let Some(steps) = config.unimproved_step_count_limit {
            termination = termination.with(UnimprovedStepCountTermination::new(steps));
        }
        if let Some(limit) = config.best_score_limit()? {
            termination = termination.with(BestScoreTermination::new(limit));
        }
        Ok(termination)
    }
}

/// Constraint weights and planning horizon from configuration.
pub fn build_constraints(config: &SolverConfig) -> RosterConstraints {
    let weights = ConstraintWeights::new(
        config.weights.ideal_load,
        config.weights.distribution,
        config.weights.unwanted_weekday,
    );
    RosterConstraints::new(weights, config.planning.months)
}

/// Move selector from the local search configuration.
pub(crate) fn build_selector(config: &SolverConfig) -> RandomMoveSelector {
    let ls = &config.local_search;
    RandomMoveSelector::new(
        ls.move_sample_size,
        ls.swap_probability,
        ls.unassign_probability,
    )
}

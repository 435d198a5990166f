//! Error type of the solve entry points.

use dutyroster_config::ConfigError;
use dutyroster_core::RosterError;
use thiserror::Error;

/// Why a solve could not start.
///
/// Only invalid input or configuration ends up here. An infeasible or
/// imperfect schedule is a normal [`SolveOutcome`](crate::SolveOutcome).
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid roster input: {0}")]
    Roster(#[from] RosterError),

    #[error("invalid solver configuration: {0}")]
    Config(#[from] ConfigError),
}

//! Configuration for the duty roster solver.
//!
//! Load solver configuration from TOML or YAML to control the planning
//! horizon, constraint weights, termination and the acceptor without code
//! changes. Every field has a default, so an empty document is valid.
//!
//! # Examples
//!
//! ```
//! use dutyroster_config::{AcceptorConfig, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [planning]
//!     months = 6
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     unimproved_step_count_limit = 20000
//!
//!     [local_search.acceptor]
//!     type = "simulated_annealing"
//!     starting_temperature = "2hard/10soft"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Duration::from_secs(30));
//! assert_eq!(config.planning.months, 6.0);
//! assert!(matches!(config.local_search.acceptor, AcceptorConfig::SimulatedAnnealing(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use dutyroster_config::SolverConfig;
//!
//! let config = SolverConfig::load("roster.toml").unwrap_or_default();
//! assert_eq!(config.worker_count, 1);
//! ```

use std::path::Path;
use std::time::Duration;

use dutyroster_core::PenaltyScore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Time limit used when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    /// Random seed for reproducible results; `None` seeds from OS entropy.
    pub random_seed: Option<u64>,

    /// Number of independent restarts run in parallel.
    pub worker_count: usize,

    /// Planning horizon.
    pub planning: PlanningConfig,

    /// Soft constraint weights.
    pub weights: WeightsConfig,

    /// Termination configuration.
    pub termination: TerminationConfig,

    /// Local search configuration.
    pub local_search: LocalSearchConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            worker_count: 1,
            planning: PlanningConfig::default(),
            weights: WeightsConfig::default(),
            termination: TerminationConfig::default(),
            local_search: LocalSearchConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the termination time limit in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination.seconds_spent_limit = Some(seconds);
        self.termination.millis_spent_limit = None;
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination.seconds_spent_limit = None;
        self.termination.millis_spent_limit = Some(millis);
        self
    }

    /// Stops after this many steps.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination.step_count_limit = Some(steps);
        self
    }

    /// Stops after this many steps without a new best score.
    pub fn with_unimproved_step_count_limit(mut self, steps: u64) -> Self {
        self.termination.unimproved_step_count_limit = Some(steps);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of parallel restarts.
    pub fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = workers;
        self
    }

    /// Sets the planning horizon in months.
    pub fn with_planning_months(mut self, months: f64) -> Self {
        self.planning.months = months;
        self
    }

    /// Sets the local search acceptor.
    pub fn with_acceptor(mut self, acceptor: AcceptorConfig) -> Self {
        self.local_search.acceptor = acceptor;
        self
    }

    /// Returns the termination time limit.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Duration {
        self.termination.time_limit()
    }

    /// Checks value ranges and parses textual scores.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.worker_count == 0 {
            return invalid("worker_count must be at least 1".to_string());
        }
        if !(self.planning.months.is_finite() && self.planning.months > 0.0) {
            return invalid(format!(
                "planning.months must be positive, got {}",
                self.planning.months
            ));
        }
        for (name, value) in self.weights.named() {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("weights.{name} must be non-negative, got {value}"));
            }
        }
        if self.time_limit().is_zero() {
            return invalid("time limit must be positive".to_string());
        }
        self.termination.best_score_limit()?;

        let ls = &self.local_search;
        if ls.move_sample_size == 0 {
            return invalid("local_search.move_sample_size must be at least 1".to_string());
        }
        for (name, p) in [
            ("swap_probability", ls.swap_probability),
            ("unassign_probability", ls.unassign_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("local_search.{name} must be within [0, 1], got {p}"));
            }
        }
        let combined = ls.swap_probability + ls.unassign_probability;
        if combined > 1.0 {
            return invalid(format!(
                "local_search swap and unassign probabilities sum to {combined}, above 1"
            ));
        }
        match &ls.acceptor {
            AcceptorConfig::LateAcceptance(la) if la.late_acceptance_size == 0 => {
                invalid("late_acceptance_size must be at least 1".to_string())
            }
            AcceptorConfig::SimulatedAnnealing(sa) => sa.starting_temperature().map(|_| ()),
            _ => Ok(()),
        }
    }
}

/// Planning horizon configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct PlanningConfig {
    /// Months the schedule covers; scales each ideal load into a target count.
    pub months: f64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self { months: 5.0 }
    }
}

/// Soft constraint weights.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct WeightsConfig {
    pub ideal_load: f64,
    pub distribution: f64,
    pub unwanted_weekday: f64,
}

impl WeightsConfig {
    fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("ideal_load", self.ideal_load),
            ("distribution", self.distribution),
            ("unwanted_weekday", self.unwanted_weekday),
        ]
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            ideal_load: 1.0,
            distribution: 0.3,
            unwanted_weekday: 0.2,
        }
    }
}

/// Termination configuration.
///
/// The solver always runs under a time limit; the other conditions can only
/// end the search earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving, added to the seconds.
    pub millis_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving, added to the seconds.
    pub minutes_spent_limit: Option<u64>,

    /// Target best score to achieve (as string, e.g., "0hard/0soft").
    pub best_score_limit: Option<String>,

    /// Maximum number of steps.
    pub step_count_limit: Option<u64>,

    /// Maximum unimproved steps before terminating.
    pub unimproved_step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit, or [`DEFAULT_TIME_LIMIT`] if none is set.
    pub fn time_limit(&self) -> Duration {
        if self.seconds_spent_limit.is_none()
            && self.millis_spent_limit.is_none()
            && self.minutes_spent_limit.is_none()
        {
            return DEFAULT_TIME_LIMIT;
        }
        let minutes = self.minutes_spent_limit.unwrap_or(0);
        let seconds = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_add(minutes.saturating_mul(60));
        Duration::from_secs(seconds)
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)))
    }

    /// Parses the best score limit, if any.
    pub fn best_score_limit(&self) -> Result<Option<PenaltyScore>, ConfigError> {
        self.best_score_limit
            .as_deref()
            .map(|s| {
                s.parse::<PenaltyScore>()
                    .map_err(|e| ConfigError::Invalid(format!("best_score_limit: {e}")))
            })
            .transpose()
    }
}

/// Local search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LocalSearchConfig {
    /// Acceptor configuration.
    pub acceptor: AcceptorConfig,

    /// Candidate moves sampled per step.
    pub move_sample_size: usize,

    /// Chance that a sampled move is a swap rather than a change.
    pub swap_probability: f64,

    /// Chance that a change move clears its slot.
    pub unassign_probability: f64,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            acceptor: AcceptorConfig::default(),
            move_sample_size: 24,
            swap_probability: 0.35,
            unassign_probability: 0.02,
        }
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Hill climbing (only accept moves that do not worsen the score).
    HillClimbing,

    /// Late acceptance acceptor.
    LateAcceptance(LateAcceptanceConfig),

    /// Simulated annealing acceptor.
    SimulatedAnnealing(SimulatedAnnealingConfig),
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig::default())
    }
}

/// Late acceptance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LateAcceptanceConfig {
    /// Size of late acceptance list.
    pub late_acceptance_size: usize,
}

impl Default for LateAcceptanceConfig {
    fn default() -> Self {
        Self {
            late_acceptance_size: 400,
        }
    }
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SimulatedAnnealingConfig {
    /// Starting temperature per score level, e.g. "1hard/5soft".
    pub starting_temperature: String,
}

impl SimulatedAnnealingConfig {
    /// Parses the starting temperature.
    pub fn starting_temperature(&self) -> Result<PenaltyScore, ConfigError> {
        self.starting_temperature
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("starting_temperature: {e}")))
    }
}

impl Default for SimulatedAnnealingConfig {
    fn default() -> Self {
        Self {
            starting_temperature: "1hard/5soft".to_string(),
        }
    }
}

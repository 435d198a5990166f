//! Score types for representing schedule quality
//!
//! A roster is judged by penalty magnitudes: fewer hard violations always
//! wins, and soft penalty only breaks ties. Scores are immutable values.

mod penalty;

#[cfg(test)]
mod tests;

pub use penalty::{scale_soft, PenaltyScore, SCALE};

/// Score level representing different constraint priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLevel {
    /// Hard constraints - must be zero for feasibility.
    Hard,
    /// Soft constraints - optimization objectives.
    Soft,
}

impl std::fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreLevel::Hard => write!(f, "hard"),
            ScoreLevel::Soft => write!(f, "soft"),
        }
    }
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}

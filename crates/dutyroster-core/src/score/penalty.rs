//! PenaltyScore - hard violation count plus scaled soft penalty
//!
//! The soft level is stored as an integer scaled by 100000, giving five
//! decimal places without floating point drift when deltas are summed.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::{ScoreLevel, ScoreParseError};

/// Scale factor for 5 decimal places of soft precision.
pub const SCALE: i64 = 100_000;

/// Converts an unscaled soft penalty into its scaled integer form.
#[inline]
pub fn scale_soft(value: f64) -> i64 {
    (value * SCALE as f64).round() as i64
}

/// A pair of penalty magnitudes compared lexicographically.
///
/// Unlike reward-style scores, lower is better here: a complete schedule
/// scores `0hard/...soft`, and any score with a lower hard magnitude beats
/// one with a higher hard magnitude regardless of soft penalty.
///
/// Totals are non-negative. Differences between two totals (move deltas)
/// use the same type and may carry negative components.
///
/// # Examples
///
/// ```
/// use dutyroster_core::PenaltyScore;
///
/// let infeasible = PenaltyScore::of(1, 0.0);
/// let feasible = PenaltyScore::of(0, 250.0);
/// assert!(feasible.is_better_than(&infeasible));
///
/// let score = PenaltyScore::of(2, 4.25);
/// assert_eq!(score.to_string(), "2hard/4.25soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyScore {
    hard: i64,
    soft: i64,
}

impl PenaltyScore {
    /// The zero score.
    pub const ZERO: PenaltyScore = PenaltyScore { hard: 0, soft: 0 };

    /// One hard violation.
    pub const ONE_HARD: PenaltyScore = PenaltyScore { hard: 1, soft: 0 };

    /// One unit of soft penalty (scaled).
    pub const ONE_SOFT: PenaltyScore = PenaltyScore {
        hard: 0,
        soft: SCALE,
    };

    /// Creates a score from a hard count and an unscaled soft penalty.
    #[inline]
    pub fn of(hard: i64, soft: f64) -> Self {
        PenaltyScore {
            hard,
            soft: scale_soft(soft),
        }
    }

    /// Creates a score from a hard count and a pre-scaled soft penalty.
    #[inline]
    pub const fn of_scaled(hard: i64, soft: i64) -> Self {
        PenaltyScore { hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        PenaltyScore { hard, soft: 0 }
    }

    /// Creates a score with only a soft component (unscaled input).
    #[inline]
    pub fn of_soft(soft: f64) -> Self {
        PenaltyScore {
            hard: 0,
            soft: scale_soft(soft),
        }
    }

    /// Creates a score with only a soft component (pre-scaled input).
    #[inline]
    pub const fn of_soft_scaled(soft: i64) -> Self {
        PenaltyScore { hard: 0, soft }
    }

    /// Returns the hard violation magnitude.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft penalty as a decimal value.
    #[inline]
    pub fn soft(&self) -> f64 {
        self.soft as f64 / SCALE as f64
    }

    /// Returns the scaled soft penalty.
    #[inline]
    pub const fn soft_scaled(&self) -> i64 {
        self.soft
    }

    /// Returns true when no hard constraint is violated.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard <= 0
    }

    /// Returns true if this score is strictly better (lower) than `other`.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns the value of a single level, soft as a decimal.
    pub fn level(&self, level: ScoreLevel) -> f64 {
        match level {
            ScoreLevel::Hard => self.hard as f64,
            ScoreLevel::Soft => self.soft(),
        }
    }
}

impl Ord for PenaltyScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for PenaltyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for PenaltyScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PenaltyScore::of_scaled(self.hard + other.hard, self.soft + other.soft)
    }
}

impl AddAssign for PenaltyScore {
    fn add_assign(&mut self, other: Self) {
        self.hard += other.hard;
        self.soft += other.soft;
    }
}

impl Sub for PenaltyScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        PenaltyScore::of_scaled(self.hard - other.hard, self.soft - other.soft)
    }
}

impl SubAssign for PenaltyScore {
    fn sub_assign(&mut self, other: Self) {
        self.hard -= other.hard;
        self.soft -= other.soft;
    }
}

impl Neg for PenaltyScore {
    type Output = Self;

    fn neg(self) -> Self {
        PenaltyScore::of_scaled(-self.hard, -self.soft)
    }
}

impl Sum for PenaltyScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(PenaltyScore::ZERO, Add::add)
    }
}

impl fmt::Debug for PenaltyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PenaltyScore({}, {:.3})", self.hard, self.soft())
    }
}

impl fmt::Display for PenaltyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, format_scaled(self.soft))
    }
}

fn format_scaled(scaled: i64) -> String {
    if scaled % SCALE == 0 {
        return (scaled / SCALE).to_string();
    }
    let formatted = format!("{:.5}", scaled as f64 / SCALE as f64);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl FromStr for PenaltyScore {
    type Err = ScoreParseError;

    /// Parses `"<hard>hard/<soft>soft"`, e.g. `"0hard/12.5soft"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (hard_part, soft_part) = s.split_once('/').ok_or_else(|| ScoreParseError {
            message: format!("Invalid PenaltyScore format '{}': expected 'Xhard/Ysoft'", s),
        })?;

        let hard_str = hard_part
            .trim()
            .strip_suffix("hard")
            .ok_or_else(|| ScoreParseError {
                message: format!("Hard score part '{}' must end with 'hard'", hard_part),
            })?;
        let soft_str = soft_part
            .trim()
            .strip_suffix("soft")
            .ok_or_else(|| ScoreParseError {
                message: format!("Soft score part '{}' must end with 'soft'", soft_part),
            })?;

        let hard = hard_str.parse::<i64>().map_err(|e| ScoreParseError {
            message: format!("Invalid hard score '{}': {}", hard_str, e),
        })?;
        let soft = soft_str.parse::<f64>().map_err(|e| ScoreParseError {
            message: format!("Invalid soft score '{}': {}", soft_str, e),
        })?;
        if !soft.is_finite() {
            return Err(ScoreParseError {
                message: format!("Soft score '{}' is not finite", soft_str),
            });
        }

        Ok(PenaltyScore::of(hard, soft))
    }
}

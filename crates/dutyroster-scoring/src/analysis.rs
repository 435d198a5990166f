//! Score explanation with a per-constraint breakdown.

use std::fmt;

use chrono::NaiveDate;
use dutyroster_core::score::scale_soft;
use dutyroster_core::{PenaltyScore, Schedule, ScoreLevel};

use crate::constraints::{self, names, RosterConstraints};

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintAnalysis {
    /// Constraint name, one of [`names`].
    pub name: &'static str,
    /// Whether the constraint is hard or soft.
    pub level: ScoreLevel,
    /// Number of violations (hard) or penalized items (soft).
    pub match_count: usize,
    /// Total score contribution.
    pub score: PenaltyScore,
}

impl ConstraintAnalysis {
    fn new(name: &'static str, level: ScoreLevel) -> Self {
        Self {
            name,
            level,
            match_count: 0,
            score: PenaltyScore::ZERO,
        }
    }

    fn add_hard(&mut self, count: i64) {
        if count > 0 {
            self.match_count += count as usize;
            self.score += PenaltyScore::of_hard(count);
        }
    }

    fn add_soft_scaled(&mut self, matches: usize, soft: i64) {
        if soft != 0 {
            self.match_count += matches;
            self.score += PenaltyScore::of_soft_scaled(soft);
        }
    }

    pub fn is_hard(&self) -> bool {
        self.level == ScoreLevel::Hard
    }
}

/// Complete score explanation.
///
/// The constraint scores always sum to `score`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreExplanation {
    pub score: PenaltyScore,
    pub constraint_analyses: Vec<ConstraintAnalysis>,
}

impl ScoreExplanation {
    /// Looks up a constraint by name.
    pub fn get(&self, name: &str) -> Option<&ConstraintAnalysis> {
        self.constraint_analyses.iter().find(|a| a.name == name)
    }

    /// Total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count).sum()
    }

    /// Constraints with a non-zero contribution.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis> {
        self.constraint_analyses
            .iter()
            .filter(|a| a.score != PenaltyScore::ZERO)
            .collect()
    }

    /// Hard violation count per hard constraint.
    pub fn hard_violations(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.constraint_analyses
            .iter()
            .filter(|a| a.is_hard())
            .map(|a| (a.name, a.score.hard()))
    }

    /// Soft total per soft constraint.
    pub fn soft_totals(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.constraint_analyses
            .iter()
            .filter(|a| !a.is_hard())
            .map(|a| (a.name, a.score.soft()))
    }
}

impl fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        for analysis in &self.constraint_analyses {
            writeln!(
                f,
                "  {:<34} {:<4} {:>5} {:>14}",
                analysis.name,
                analysis.level.to_string(),
                analysis.match_count,
                analysis.score.to_string()
            )?;
        }
        Ok(())
    }
}

impl RosterConstraints {
    /// Scores the schedule and breaks the result down per constraint.
    pub fn explain(&self, schedule: &Schedule) -> ScoreExplanation {
        let people = schedule.people();
        let weights = self.weights();

        let mut distinct = ConstraintAnalysis::new(names::DISTINCT_SLOTS, ScoreLevel::Hard);
        let mut staffed = ConstraintAnalysis::new(names::STAFFED_SLOTS, ScoreLevel::Hard);
        let mut available = ConstraintAnalysis::new(names::AVAILABILITY, ScoreLevel::Hard);
        let mut same_week = ConstraintAnalysis::new(names::SAME_WEEK, ScoreLevel::Hard);
        let mut at_least_once = ConstraintAnalysis::new(names::AT_LEAST_ONCE, ScoreLevel::Hard);
        let mut load = ConstraintAnalysis::new(names::IDEAL_LOAD, ScoreLevel::Soft);
        let mut spread = ConstraintAnalysis::new(names::DISTRIBUTION, ScoreLevel::Soft);
        let mut unwanted = ConstraintAnalysis::new(names::UNWANTED_WEEKDAY, ScoreLevel::Soft);

        let unwanted_unit = scale_soft(weights.unwanted_weekday);
        for shift in schedule.shifts() {
            distinct.add_hard(constraints::distinct_slots(shift));
            staffed.add_hard(constraints::empty_slots(shift));
            available.add_hard(constraints::unavailable_slots(shift, people));
            let count = constraints::unwanted_slots(shift, people);
            unwanted.add_soft_scaled(count as usize, count * unwanted_unit);
        }
        same_week.add_hard(constraints::same_week_collisions(schedule.shifts()));

        for (idx, person) in people.iter().enumerate() {
            let mut dates: Vec<NaiveDate> = schedule
                .shifts_of(idx)
                .map(|s| schedule.shift(s).date())
                .collect();
            dates.sort_unstable();

            at_least_once.add_hard(constraints::unassigned_person(dates.len()));
            let load_penalty =
                constraints::ideal_load_penalty(person, dates.len(), self.planning_months());
            load.add_soft_scaled(1, scale_soft(weights.ideal_load * load_penalty));
            let spread_penalty = constraints::distribution_penalty(person, dates);
            spread.add_soft_scaled(1, scale_soft(weights.distribution * spread_penalty));
        }

        let constraint_analyses = vec![
            distinct,
            staffed,
            available,
            same_week,
            at_least_once,
            load,
            spread,
            unwanted,
        ];
        let score = constraint_analyses.iter().map(|a| a.score).sum();
        ScoreExplanation {
            score,
            constraint_analyses,
        }
    }
}

//! Roster constraints as pure functions.
//!
//! Each constraint is a function over the touched part of a schedule that
//! returns an unweighted violation count or penalty. [`RosterConstraints`]
//! applies the weights and sums them into a [`PenaltyScore`]. The same
//! per-shift and per-person terms back both full scoring and the
//! incremental [`ScoreDirector`](crate::ScoreDirector), so the two always
//! agree exactly.

use std::collections::BTreeMap;

use chrono::{IsoWeek, NaiveDate};
use dutyroster_core::score::scale_soft;
use dutyroster_core::{days_between, PenaltyScore, Person, Schedule, Shift};

use crate::weights::ConstraintWeights;


/// Constraint names used in score explanations.
pub mod names {
    pub const DISTINCT_SLOTS: &str = "Distinct slots";
    pub const STAFFED_SLOTS: &str = "Every slot staffed";
    pub const AVAILABILITY: &str = "Person available";
    pub const SAME_WEEK: &str = "No person twice in the same week";
    pub const AT_LEAST_ONCE: &str = "Everyone serves at least once";
    pub const IDEAL_LOAD: &str = "Ideal monthly load";
    pub const DISTRIBUTION: &str = "Well-distributed shifts";
    pub const UNWANTED_WEEKDAY: &str = "Avoid unwanted weekdays";
}

/// Gaps within this many days of the expected gap are free.
pub const GAP_TOLERANCE_DAYS: f64 = 5.0;

/// Exponent applied to gap deviations beyond the tolerance.
pub const GAP_EXPONENT: f64 = 1.25;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 1 if both slots hold the same person, else 0.
#[inline]
pub fn distinct_slots(shift: &Shift) -> i64 {
    match shift.slots() {
        [Some(a), Some(b)] if a == b => 1,
        _ => 0,
    }
}

/// Number of empty slots.
#[inline]
pub fn empty_slots(shift: &Shift) -> i64 {
    shift.slots().iter().filter(|p| p.is_none()).count() as i64
}

/// Number of occupied slots whose person is not available on the shift date.
#[inline]
pub fn unavailable_slots(shift: &Shift, people: &[Person]) -> i64 {
    shift
        .slots()
        .iter()
        .flatten()
        .filter(|&&p| !people[p].is_available(shift.date()))
        .count() as i64
}

/// Number of occupied slots falling on one of the person's unwanted weekdays.
#[inline]
pub fn unwanted_slots(shift: &Shift, people: &[Person]) -> i64 {
    shift
        .slots()
        .iter()
        .flatten()
        .filter(|&&p| people[p].is_unwanted_date(shift.date()))
        .count() as i64
}

/// Collisions among `shifts_in_week` shifts of one week sharing a person.
///
/// Every unordered pair of those shifts is one violation.
#[inline]
pub fn week_collisions(shifts_in_week: u32) -> i64 {
    let k = shifts_in_week as i64;
    k * (k - 1) / 2
}

/// Counts, over every unordered pair of distinct shifts in the same ISO
/// week, the people appearing in both.
pub fn same_week_collisions(shifts: &[Shift]) -> i64 {
    let mut by_week: BTreeMap<IsoWeek, Vec<&Shift>> = BTreeMap::new();
    for shift in shifts {
        by_week.entry(shift.week()).or_default().push(shift);
    }

    let mut collisions = 0;
    for week_shifts in by_week.values() {
        for (i, first) in week_shifts.iter().enumerate() {
            for second in &week_shifts[i + 1..] {
                collisions += first.occupants().filter(|&p| second.contains(p)).count() as i64;
            }
        }
    }
    collisions
}

/// 1 if the person holds no shift, else 0.
#[inline]
pub fn unassigned_person(assigned: usize) -> i64 {
    i64::from(assigned == 0)
}

/// Squared deviation of `assigned` from the person's target over `months`.
#[inline]
pub fn ideal_load_penalty(person: &Person, assigned: usize, months: f64) -> f64 {
    let deviation = assigned as f64 - person.ideal_shift_count(months);
    deviation * deviation
}

/// Uneven spacing of a person's shifts, in weeks rounded to two decimals.
///
/// For consecutive dates, each gap that deviates from
/// [`Person::expected_gap_days`] by more than [`GAP_TOLERANCE_DAYS`] adds
/// the excess raised to [`GAP_EXPONENT`]. Fewer than two dates cost nothing.
/// `dates` must be ascending.
pub fn distribution_penalty(person: &Person, dates: impl IntoIterator<Item = NaiveDate>) -> f64 {
    let expected = person.expected_gap_days();
    let mut dates = dates.into_iter();
    let Some(mut previous) = dates.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for date in dates {
        let gap = days_between(previous, date) as f64;
        let excess = ((gap - expected).abs() - GAP_TOLERANCE_DAYS).max(0.0);
        total += excess.powf(GAP_EXPONENT);
        previous = date;
    }
    round2(total / 7.0)
}

/// Weighted roster constraints over a planning horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterConstraints {
    weights: ConstraintWeights,
    planning_months: f64,
}

impl Default for RosterConstraints {
    fn default() -> Self {
        Self::new(ConstraintWeights::default(), 5.0)
    }
}

impl RosterConstraints {
    pub fn new(weights: ConstraintWeights, planning_months: f64) -> Self {
        Self {
            weights,
            planning_months,
        }
    }

    pub fn weights(&self) -> &ConstraintWeights {
        &self.weights
    }

    pub fn planning_months(&self) -> f64 {
        self.planning_months
    }

    /// Score terms owned by one shift: distinct and staffed slots,
    /// availability and unwanted weekdays.
    #[inline]
    pub fn shift_score(&self, shift: &Shift, people: &[Person]) -> PenaltyScore {
        let hard = distinct_slots(shift) + empty_slots(shift) + unavailable_slots(shift, people);
        let unwanted = unwanted_slots(shift, people);
        let soft = unwanted * scale_soft(self.weights.unwanted_weekday);
        PenaltyScore::of_scaled(hard, soft)
    }

    /// Score terms owned by one person: at-least-once, ideal load and
    /// distribution. `dates` are the person's shift dates, ascending.
    pub fn person_score(
        &self,
        person: &Person,
        assigned: usize,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> PenaltyScore {
        let load = ideal_load_penalty(person, assigned, self.planning_months);
        let spread = distribution_penalty(person, dates);
        let soft = scale_soft(self.weights.ideal_load * load)
            + scale_soft(self.weights.distribution * spread);
        PenaltyScore::of_scaled(unassigned_person(assigned), soft)
    }

    /// Recomputes the whole score from the slot contents.
    pub fn score(&self, schedule: &Schedule) -> PenaltyScore {
        let people = schedule.people();
        let mut total: PenaltyScore = schedule
            .shifts()
            .iter()
            .map(|s| self.shift_score(s, people))
            .sum();

        for (idx, person) in people.iter().enumerate() {
            let mut dates: Vec<NaiveDate> = schedule
                .shifts_of(idx)
                .map(|s| schedule.shift(s).date())
                .collect();
            dates.sort_unstable();
            total += self.person_score(person, dates.len(), dates);
        }

        total += PenaltyScore::of_hard(same_week_collisions(schedule.shifts()));
        total
    }
}

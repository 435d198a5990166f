//! Per-person summary of a solved schedule.

use std::fmt;

use chrono::NaiveDate;
use dutyroster_core::{days_between, PersonIdx, Schedule};

/// How one person fared in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub name: String,
    /// Shifts the person holds.
    pub assigned: usize,
    /// Ideal shift count over the planning horizon.
    pub ideal: f64,
    /// Shortest gap in days between consecutive shifts; None with fewer than two.
    pub min_gap_days: Option<i64>,
    /// Longest gap in days between consecutive shifts; None with fewer than two.
    pub max_gap_days: Option<i64>,
    /// Gap the person would ideally have between shifts.
    pub expected_gap_days: f64,
    /// Assigned shift dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Assignments on one of the person's unwanted weekdays.
    pub unwanted_assignments: usize,
}

impl PersonSummary {
    /// Summarizes `person` in `schedule` for a horizon of `planning_months`.
    pub fn of(schedule: &Schedule, person: PersonIdx, planning_months: f64) -> Self {
        let p = schedule.person(person);
        let mut dates: Vec<NaiveDate> = schedule
            .shifts_of(person)
            .map(|i| schedule.shift(i).date())
            .collect();
        dates.sort_unstable();
        dates.dedup();

        let gaps: Vec<i64> = dates.windows(2).map(|w| days_between(w[0], w[1])).collect();
        let unwanted_assignments = dates.iter().filter(|&&d| p.is_unwanted_date(d)).count();

        Self {
            name: p.name().to_string(),
            assigned: dates.len(),
            ideal: p.ideal_shift_count(planning_months),
            min_gap_days: gaps.iter().min().copied(),
            max_gap_days: gaps.iter().max().copied(),
            expected_gap_days: p.expected_gap_days(),
            dates,
            unwanted_assignments,
        }
    }

    /// Assigned minus ideal; positive means overloaded.
    pub fn deviation(&self) -> f64 {
        self.assigned as f64 - self.ideal
    }
}

impl fmt::Display for PersonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} shifts (ideal {:.2}), ",
            self.name, self.assigned, self.ideal
        )?;
        match (self.min_gap_days, self.max_gap_days) {
            (Some(min), Some(max)) => write!(f, "gaps {min}..{max} days")?,
            _ => write!(f, "no gaps")?,
        }
        write!(
            f,
            " (expected {:.2}), {} on unwanted days",
            self.expected_gap_days, self.unwanted_assignments
        )
    }
}

/// Summaries of every person, in input order.
pub fn summarize(schedule: &Schedule, planning_months: f64) -> Vec<PersonSummary> {
    (0..schedule.person_count())
        .map(|idx| PersonSummary::of(schedule, idx, planning_months))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use dutyroster_test::{date, person, schedule_of};

    #[test]
    fn test_summary_gaps_and_counts() {
        let dates = [date(2026, 1, 7), date(2026, 1, 14), date(2026, 2, 4)];
        let people = vec![person("Anna", 1.0, &dates), person("Bert", 1.0, &dates)];
        let schedule = schedule_of(
            people,
            &[
                (dates[0], Some("Anna"), Some("Bert")),
                (dates[1], Some("Anna"), None),
                (dates[2], Some("Anna"), None),
            ],
        );

        let anna = PersonSummary::of(&schedule, 0, 5.0);
        assert_eq!(anna.assigned, 3);
        assert_eq!(anna.ideal, 5.0);
        assert_eq!(anna.min_gap_days, Some(7));
        assert_eq!(anna.max_gap_days, Some(21));
        assert_eq!(anna.expected_gap_days, 28.0);
        assert_eq!(anna.deviation(), -2.0);

        let bert = PersonSummary::of(&schedule, 1, 5.0);
        assert_eq!(bert.assigned, 1);
        assert_eq!(bert.min_gap_days, None);
        assert_eq!(
            bert.to_string(),
            "Bert: 1 shifts (ideal 5.00), no gaps (expected 28.00), 0 on unwanted days"
        );
    }

    #[test]
    fn test_summary_counts_unwanted_weekdays() {
        // 2026-01-07 is a Wednesday.
        let dates = [date(2026, 1, 7), date(2026, 1, 15)];
        let anna = person("Anna", 2.0, &dates).with_unwanted_days([Weekday::Wed]);
        let schedule = schedule_of(
            vec![anna],
            &[(dates[0], Some("Anna"), None), (dates[1], Some("Anna"), None)],
        );
        let summary = PersonSummary::of(&schedule, 0, 5.0);
        assert_eq!(summary.unwanted_assignments, 1);
        assert_eq!(summary.expected_gap_days, 14.0);
    }

    #[test]
    fn test_summarize_keeps_input_order() {
        let dates = [date(2026, 1, 7)];
        let people = vec![person("Zoe", 1.0, &dates), person("Abe", 1.0, &dates)];
        let schedule = schedule_of(people, &[(dates[0], Some("Zoe"), Some("Abe"))]);
        let names: Vec<String> = summarize(&schedule, 5.0).into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Zoe", "Abe"]);
    }
}

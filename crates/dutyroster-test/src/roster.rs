//! People, schedules and generated problem instances.
//!
//! # Example
//!
//! ```
//! use dutyroster_test::{date, person, schedule_of};
//!
//! let d = date(2026, 1, 7);
//! let schedule = schedule_of(
//!     vec![person("Anna", 1.0, &[d]), person("Ben", 1.0, &[d])],
//!     &[(d, Some("Anna"), Some("Ben"))],
//! );
//! assert_eq!(schedule.assigned_count(0), 1);
//! ```

use chrono::NaiveDate;
use dutyroster_core::{Person, RosterProblem, Schedule, Shift};

use crate::calendar::{date, weekly_dates};

/// First shift date of generated instances, a Wednesday.
pub const FIRST_SHIFT: (i32, u32, u32) = (2026, 1, 7);

/// A person available on `dates`.
pub fn person(name: &str, ideal_load: f64, dates: &[NaiveDate]) -> Person {
    Person::new(name, ideal_load).with_available_dates(dates.iter().copied())
}

/// Builds a schedule from people and `(date, slot A name, slot B name)` rows.
///
/// # Panics
/// Panics if a name is not among `people`.
pub fn schedule_of(
    people: Vec<Person>,
    rows: &[(NaiveDate, Option<&str>, Option<&str>)],
) -> Schedule {
    let index = |name: Option<&str>| {
        name.map(|n| {
            people
                .iter()
                .position(|p| p.name() == n)
                .unwrap_or_else(|| panic!("unknown person {n}"))
        })
    };
    let shifts = rows
        .iter()
        .map(|&(d, a, b)| Shift::with_slots(d, index(a), index(b)))
        .collect();
    Schedule::new(people, shifts)
}

/// One shift per week for `weeks` weeks and `people` people available on
/// every date, each with ideal load 1.0.
///
/// With one shift per week, same-week conflicts never arise and every shift
/// has at least two candidates whenever `people >= 2`.
pub fn feasible_problem(weeks: usize, people: usize) -> RosterProblem {
    let (y, m, d) = FIRST_SHIFT;
    let dates = weekly_dates(date(y, m, d), weeks);
    let people = (0..people)
        .map(|i| person(&format!("P{i:02}"), 1.0, &dates))
        .collect();
    RosterProblem::new(dates, people).unwrap_or_else(|e| panic!("fixture is invalid: {e}"))
}

/// Like [`feasible_problem`], but each person is available on only two of
/// every three weeks, staggered so each date keeps two thirds of the people.
pub fn tight_problem(weeks: usize, people: usize) -> RosterProblem {
    let (y, m, d) = FIRST_SHIFT;
    let dates = weekly_dates(date(y, m, d), weeks);
    let people = (0..people)
        .map(|i| {
            let available: Vec<NaiveDate> = dates
                .iter()
                .enumerate()
                .filter(|(w, _)| (w + i) % 3 != 0)
                .map(|(_, &d)| d)
                .collect();
            person(&format!("P{i:02}"), 1.0, &available)
        })
        .collect();
    RosterProblem::new(dates, people).unwrap_or_else(|e| panic!("fixture is invalid: {e}"))
}

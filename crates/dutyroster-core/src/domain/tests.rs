//! Tests for the domain model.

use chrono::{Datelike, NaiveDate, Weekday};

use super::*;
use crate::error::RosterError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn person(name: &str, dates: &[NaiveDate]) -> Person {
    Person::new(name, 1.0).with_available_dates(dates.iter().copied())
}

#[test]
fn test_iso_week_numbers() {
    assert_eq!(week_of(date(2026, 1, 1)).week(), 1);
    assert_eq!(week_of(date(2026, 1, 7)).week(), 2);
    assert_eq!(week_of(date(2026, 2, 10)).week(), 7);
    assert_eq!(week_of(date(2026, 12, 31)).week(), 53);
}

#[test]
fn test_iso_week_crosses_year_boundary() {
    let week = week_of(date(2024, 12, 30));
    assert_eq!(week.year(), 2025);
    assert_eq!(week.week(), 1);
    assert_eq!(week, week_of(date(2025, 1, 5)));
    assert_ne!(week, week_of(date(2025, 1, 6)));
}

#[test]
fn test_same_week_number_different_year_is_distinct() {
    assert_eq!(week_of(date(2025, 3, 3)).week(), week_of(date(2026, 3, 2)).week());
    assert_ne!(week_of(date(2025, 3, 3)), week_of(date(2026, 3, 2)));
}

#[test]
fn test_days_between() {
    assert_eq!(days_between(date(2026, 1, 1), date(2026, 1, 29)), 28);
    assert_eq!(days_between(date(2026, 1, 29), date(2026, 1, 1)), -28);
}

#[test]
fn test_parse_weekday_labels() {
    assert_eq!(parse_weekday("Mo").unwrap(), Weekday::Mon);
    assert_eq!(parse_weekday("Di").unwrap(), Weekday::Tue);
    assert_eq!(parse_weekday("Mi").unwrap(), Weekday::Wed);
    assert_eq!(parse_weekday("Do").unwrap(), Weekday::Thu);
    assert_eq!(parse_weekday("Fr").unwrap(), Weekday::Fri);
    assert_eq!(parse_weekday(" sa ").unwrap(), Weekday::Sat);
    assert_eq!(parse_weekday("So").unwrap(), Weekday::Sun);
    assert_eq!(parse_weekday("Tuesday").unwrap(), Weekday::Tue);
    assert_eq!(parse_weekday("THU").unwrap(), Weekday::Thu);
}

#[test]
fn test_parse_weekday_unknown() {
    assert_eq!(
        parse_weekday("Xy"),
        Err(RosterError::UnknownWeekday("Xy".to_string()))
    );
}

#[test]
fn test_parse_date_formats() {
    assert_eq!(parse_date("2026-01-07").unwrap(), date(2026, 1, 7));
    assert_eq!(parse_date("07.01.26").unwrap(), date(2026, 1, 7));
    assert_eq!(parse_date("7.1.2026").unwrap(), date(2026, 1, 7));
}

#[test]
fn test_parse_date_malformed() {
    for bad in ["", "31.02.26", "2026/01/07", "aa.01.26", "2026-13-01"] {
        assert!(
            matches!(parse_date(bad), Err(RosterError::MalformedDate { .. })),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_person_availability_and_unwanted() {
    let wed = date(2026, 1, 7);
    let thu = date(2026, 1, 8);
    let p = person("Anna", &[wed]).with_unwanted_days([Weekday::Wed]);

    assert!(p.is_available(wed));
    assert!(!p.is_available(thu));
    assert!(p.is_unwanted_date(wed));
    assert!(!p.is_unwanted_date(thu));
    assert_eq!(wed.weekday(), Weekday::Wed);
}

#[test]
fn test_person_identity_by_name() {
    let a = Person::new("Anna", 1.0);
    let b = Person::new("Anna", 2.0).with_available_dates([date(2026, 1, 7)]);
    assert_eq!(a, b);

    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
}

#[test]
fn test_person_targets() {
    let p = Person::new("Anna", 1.0);
    assert_eq!(p.ideal_shift_count(5.0), 5.0);
    assert_eq!(p.expected_gap_days(), 28.0);
    assert_eq!(Person::new("Ben", 2.0).expected_gap_days(), 14.0);
    assert_eq!(Person::new("Cleo", 3.0).expected_gap_days(), 9.33);
}

#[test]
fn test_shift_slots() {
    let mut shift = Shift::new(date(2026, 1, 7));
    assert!(!shift.is_complete());

    assert_eq!(shift.set_slot(Slot::A, Some(3)), None);
    assert_eq!(shift.set_slot(Slot::B, Some(3)), None);
    assert!(shift.is_complete());
    assert!(shift.contains(3));
    assert_eq!(shift.occupants().collect::<Vec<_>>(), vec![3]);

    assert_eq!(shift.set_slot(Slot::B, Some(1)), Some(3));
    assert_eq!(shift.occupants().collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(Slot::A.other(), Slot::B);
}

#[test]
fn test_schedule_assign_snapshot_restore() {
    let d1 = date(2026, 1, 7);
    let d2 = date(2026, 1, 14);
    let people = vec![person("Anna", &[d1, d2]), person("Ben", &[d1, d2])];
    let mut schedule = Schedule::new(people, vec![Shift::new(d1), Shift::new(d2)]);

    assert_eq!(schedule.unassigned_slot_count(), 4);
    schedule.assign(0, Slot::A, Some(0));
    schedule.assign(0, Slot::B, Some(1));
    let snapshot = schedule.snapshot();

    schedule.assign(1, Slot::A, Some(0));
    assert_eq!(schedule.assigned_count(0), 2);
    assert_eq!(schedule.shifts_of(0).collect::<Vec<_>>(), vec![0, 1]);

    schedule.restore(&snapshot).unwrap();
    assert_eq!(schedule.assigned_count(0), 1);
    assert_eq!(schedule.unassigned_slot_count(), 2);
    assert_eq!(schedule.person_index("Ben"), Some(1));
    assert_eq!(schedule.person_index("Cleo"), None);
}

#[test]
fn test_restore_rejects_foreign_snapshot() {
    let d1 = date(2026, 1, 7);
    let people = vec![person("Anna", &[d1]), person("Ben", &[d1])];
    let mut schedule = Schedule::new(people, vec![Shift::new(d1)]);
    schedule.assign(0, Slot::A, Some(1));

    let err = schedule.restore(&[[None, None], [None, None]]).unwrap_err();
    assert_eq!(err, RosterError::SnapshotMismatch { expected: 1, actual: 2 });
    assert_eq!(schedule.shift(0).slot(Slot::A), Some(1));
}

#[test]
fn test_schedule_display() {
    let d1 = date(2026, 1, 7);
    let people = vec![person("Anna", &[d1])];
    let schedule = Schedule::new(people, vec![Shift::with_slots(d1, Some(0), None)]);
    assert_eq!(schedule.to_string(), "2026-01-07: Anna, -\n");
}

#[test]
fn test_problem_valid() {
    let d1 = date(2026, 1, 7);
    let d2 = date(2026, 1, 14);
    let problem = RosterProblem::new(
        vec![d1, d2],
        vec![person("Anna", &[d1]), person("Ben", &[d1, d2])],
    )
    .unwrap();

    let schedule = problem.to_schedule();
    assert_eq!(schedule.shift_count(), 2);
    assert_eq!(schedule.unassigned_slot_count(), 4);

    let overview = problem.availability_overview();
    assert_eq!(overview[0].date, d1);
    assert_eq!(overview[0].available, vec!["Anna", "Ben"]);
    assert_eq!(overview[1].available, vec!["Ben"]);
}

#[test]
fn test_problem_date_mismatch_reports_both_sets() {
    let d1 = date(2026, 1, 7);
    let d2 = date(2026, 1, 14);
    let d3 = date(2026, 1, 21);
    let d4 = date(2026, 1, 28);
    let err = RosterProblem::new(
        vec![d3, d1, d2],
        vec![person("Anna", &[d1, d4])],
    )
    .unwrap_err();

    assert_eq!(
        err,
        RosterError::DateMismatch {
            only_in_shifts: vec![d2, d3],
            only_in_people: vec![d4],
        }
    );
}

#[test]
fn test_problem_rejects_invalid_input() {
    let d1 = date(2026, 1, 7);

    assert_eq!(
        RosterProblem::new(vec![], vec![person("Anna", &[d1])]).unwrap_err(),
        RosterError::EmptyProblem
    );
    assert_eq!(
        RosterProblem::new(vec![d1, d1], vec![person("Anna", &[d1])]).unwrap_err(),
        RosterError::DuplicateShift(d1)
    );
    assert_eq!(
        RosterProblem::new(vec![d1], vec![person("Anna", &[d1]), person("Anna", &[d1])])
            .unwrap_err(),
        RosterError::DuplicatePerson("Anna".to_string())
    );
    assert_eq!(
        RosterProblem::new(vec![d1], vec![Person::new("Anna", 1.0)]).unwrap_err(),
        RosterError::NoAvailability("Anna".to_string())
    );
    assert!(matches!(
        RosterProblem::new(
            vec![d1],
            vec![Person::new("Anna", 0.0).with_available_dates([d1])]
        ),
        Err(RosterError::InvalidIdealLoad { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_problem_input_conversion() {
    let input = ProblemInput {
        dates: vec!["07.01.26".to_string(), "2026-01-14".to_string()],
        people: vec![PersonInput {
            name: "Anna".to_string(),
            ideal_load: 1.5,
            available_dates: vec!["2026-01-07".to_string(), "14.01.26".to_string()],
            unwanted_days: vec!["Mi".to_string()],
        }],
    };
    let problem = RosterProblem::try_from(input).unwrap();
    assert_eq!(problem.dates(), &[date(2026, 1, 7), date(2026, 1, 14)]);
    assert!(problem.people()[0].is_unwanted_date(date(2026, 1, 7)));
}

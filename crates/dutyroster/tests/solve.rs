//! End-to-end tests of the solve entry point.

use dutyroster::{
    solve, ConfigError, Person, RosterError, RosterProblem, SolveError, SolverConfig,
};
use dutyroster_test::{date, feasible_problem, person, tight_problem, weekly_dates};

fn quick_config(seed: u64) -> SolverConfig {
    SolverConfig::new()
        .with_random_seed(seed)
        .with_step_count_limit(400)
        .with_termination_seconds(30)
}

#[test]
fn solves_feasible_instance_without_hard_violations() {
    let problem = feasible_problem(12, 6);
    let outcome = solve(&problem, &quick_config(1)).unwrap();

    assert!(outcome.is_feasible(), "score was {}", outcome.score);
    assert_eq!(outcome.schedule.unassigned_slot_count(), 0);
    assert_eq!(outcome.people.len(), 6);
    for summary in &outcome.people {
        assert!(summary.assigned >= 1, "{summary}");
    }
}

#[test]
fn explanation_matches_outcome_score() {
    let outcome = solve(&tight_problem(10, 6), &quick_config(2)).unwrap();
    assert_eq!(outcome.explanation.score, outcome.score);

    let hard: i64 = outcome.explanation.hard_violations().map(|(_, n)| n).sum();
    assert_eq!(hard, outcome.score.hard());
}

#[test]
fn infeasible_instance_is_not_an_error() {
    // Only Anna can work on the first date, so its second slot stays open or
    // breaks a hard constraint.
    let dates = weekly_dates(date(2026, 1, 7), 4);
    let people = vec![
        person("Anna", 1.0, &dates),
        person("Bert", 1.0, &dates[1..]),
        person("Carla", 1.0, &dates[1..]),
    ];
    let problem = RosterProblem::new(dates, people).unwrap();

    let outcome = solve(&problem, &quick_config(3)).unwrap();
    assert!(!outcome.is_feasible());
    assert!(outcome.score.hard() > 0);
    assert_eq!(outcome.explanation.score, outcome.score);
}

#[test]
fn same_seed_gives_same_schedule() {
    let problem = tight_problem(10, 7);
    let a = solve(&problem, &quick_config(42)).unwrap();
    let b = solve(&problem, &quick_config(42)).unwrap();
    assert_eq!(a.schedule.snapshot(), b.schedule.snapshot());
    assert_eq!(a.score, b.score);
    assert_eq!(a.seed, 42);
}

#[test]
fn parallel_workers_report_combined_stats() {
    let config = quick_config(5).with_worker_count(3);
    let outcome = solve(&tight_problem(8, 5), &config).unwrap();
    assert_eq!(outcome.stats.step_count, 3 * 400);
    assert!(outcome.worker < 3);
}

#[test]
fn date_mismatch_is_reported_with_both_differences() {
    let dates = weekly_dates(date(2026, 1, 7), 3);
    let stray = date(2026, 1, 8);
    let people = vec![
        person("Anna", 1.0, &dates[..2]),
        person("Bert", 1.0, &[dates[0], stray]),
    ];
    let err = RosterProblem::new(dates.clone(), people).unwrap_err();
    assert_eq!(
        err,
        RosterError::DateMismatch {
            only_in_shifts: vec![dates[2]],
            only_in_people: vec![stray],
        }
    );
}

#[test]
fn invalid_config_is_an_error() {
    let problem = feasible_problem(4, 4);
    let config = quick_config(1).with_worker_count(0);
    let err = solve(&problem, &config).unwrap_err();
    assert!(matches!(err, SolveError::Config(ConfigError::Invalid(_))));
}

#[test]
fn report_lists_dates_and_gaps() {
    let problem = feasible_problem(8, 4);
    let outcome = solve(&problem, &quick_config(8)).unwrap();

    for summary in &outcome.people {
        assert_eq!(summary.dates.len(), summary.assigned);
        assert_eq!(summary.expected_gap_days, 28.0);
        if summary.assigned >= 2 {
            let min = summary.min_gap_days.unwrap();
            let max = summary.max_gap_days.unwrap();
            assert!(min >= 7 && min <= max);
        }
    }
    let anna = outcome.person("P00").unwrap();
    assert_eq!(anna.name, "P00");
}

#[test]
fn outcome_display_contains_every_shift() {
    let problem = feasible_problem(3, 3);
    let outcome = solve(&problem, &quick_config(4)).unwrap();
    let text = outcome.to_string();
    for d in problem.dates() {
        assert!(text.contains(&d.to_string()), "missing {d} in\n{text}");
    }
    assert!(text.contains("Score:"));
}

#[test]
fn weights_from_config_change_the_score() {
    let dates = weekly_dates(date(2026, 1, 7), 2);
    let people = vec![
        Person::new("Anna", 1.0).with_available_dates(dates.iter().copied()),
        Person::new("Bert", 1.0).with_available_dates(dates.iter().copied()),
    ];
    let problem = RosterProblem::new(dates, people).unwrap();

    let mut flat = quick_config(6);
    flat.weights.distribution = 0.0;
    let base = solve(&problem, &flat).unwrap();
    let mut heavier = flat.clone();
    heavier.weights.ideal_load = 2.0;
    let weighted = solve(&problem, &heavier).unwrap();

    // Both serve twice against an ideal of five; spacing is not weighted.
    assert_eq!(base.score.soft(), 18.0);
    assert_eq!(weighted.score.soft(), 36.0);
}

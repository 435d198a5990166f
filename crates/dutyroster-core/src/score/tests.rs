//! Tests for penalty scores.

use super::*;

#[test]
fn test_creation_unscaled() {
    let score = PenaltyScore::of(2, 1.5);
    assert_eq!(score.hard(), 2);
    assert_eq!(score.soft_scaled(), 150_000);
    assert_eq!(score.soft(), 1.5);
}

#[test]
fn test_lower_hard_always_wins() {
    let infeasible = PenaltyScore::of(1, 0.0);
    let feasible = PenaltyScore::of(0, 1000.0);
    assert!(feasible.is_better_than(&infeasible));
    assert!(feasible < infeasible);
}

#[test]
fn test_soft_breaks_ties() {
    let a = PenaltyScore::of(3, 4.0);
    let b = PenaltyScore::of(3, 4.2);
    assert!(a.is_better_than(&b));
    assert!(!b.is_better_than(&a));
    assert!(!a.is_better_than(&a));
}

#[test]
fn test_feasibility() {
    assert!(PenaltyScore::of(0, 12.0).is_feasible());
    assert!(!PenaltyScore::ONE_HARD.is_feasible());
}

#[test]
fn test_arithmetic() {
    let a = PenaltyScore::of(2, 1.25);
    let b = PenaltyScore::of(1, 0.75);

    assert_eq!(a + b, PenaltyScore::of(3, 2.0));
    assert_eq!(a - b, PenaltyScore::of(1, 0.5));
    assert_eq!(b - a, PenaltyScore::of(-1, -0.5));
    assert_eq!(-a, PenaltyScore::of(-2, -1.25));

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);

    let total: PenaltyScore = [a, b, PenaltyScore::ONE_SOFT].into_iter().sum();
    assert_eq!(total, PenaltyScore::of(3, 3.0));
}

#[test]
fn test_display() {
    assert_eq!(PenaltyScore::ZERO.to_string(), "0hard/0soft");
    assert_eq!(PenaltyScore::of(3, 12.0).to_string(), "3hard/12soft");
    assert_eq!(PenaltyScore::of(0, 0.3).to_string(), "0hard/0.3soft");
    assert_eq!(PenaltyScore::of_scaled(1, 12_345).to_string(), "1hard/0.12345soft");
}

#[test]
fn test_parse() {
    let score: PenaltyScore = "2hard/4.25soft".parse().unwrap();
    assert_eq!(score, PenaltyScore::of(2, 4.25));

    let zero: PenaltyScore = " 0hard/0soft ".parse().unwrap();
    assert_eq!(zero, PenaltyScore::ZERO);
}

#[test]
fn test_parse_errors() {
    assert!("2hard".parse::<PenaltyScore>().is_err());
    assert!("2/4soft".parse::<PenaltyScore>().is_err());
    assert!("2hard/4".parse::<PenaltyScore>().is_err());
    assert!("xhard/4soft".parse::<PenaltyScore>().is_err());
    assert!("1.5hard/4soft".parse::<PenaltyScore>().is_err());
}

#[test]
fn test_levels() {
    let score = PenaltyScore::of(2, 0.5);
    assert_eq!(score.level(ScoreLevel::Hard), 2.0);
    assert_eq!(score.level(ScoreLevel::Soft), 0.5);
    assert_eq!(ScoreLevel::Soft.to_string(), "soft");
}

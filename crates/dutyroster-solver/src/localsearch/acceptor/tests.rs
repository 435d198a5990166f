//! Tests for acceptors.

use super::*;
use dutyroster_core::ScoreLevel;
use rand::SeedableRng;

fn rng() -> SolverRng {
    SolverRng::seed_from_u64(0)
}

fn score(hard: i64, soft: f64) -> PenaltyScore {
    PenaltyScore::of(hard, soft)
}

#[test]
fn test_hill_climbing_accepts_improving() {
    let mut acceptor = HillClimbingAcceptor::new();
    assert!(acceptor.is_accepted(score(2, 0.0), score(1, 9.0), &mut rng()));
}

#[test]
fn test_hill_climbing_accepts_equal() {
    let mut acceptor = HillClimbingAcceptor::new();
    assert!(acceptor.is_accepted(score(0, 3.0), score(0, 3.0), &mut rng()));
}

#[test]
fn test_hill_climbing_rejects_worsening() {
    let mut acceptor = HillClimbingAcceptor::new();
    assert!(!acceptor.is_accepted(score(0, 3.0), score(0, 3.5), &mut rng()));
    assert!(!acceptor.is_accepted(score(0, 3.0), score(1, 0.0), &mut rng()));
}

#[test]
fn test_late_acceptance_history() {
    let mut acceptor = LateAcceptanceAcceptor::new(3);
    let mut rng = rng();
    acceptor.phase_started(score(0, 10.0));

    // Worse than last step but no worse than the initial history.
    assert!(acceptor.is_accepted(score(0, 5.0), score(0, 9.0), &mut rng));
    assert!(!acceptor.is_accepted(score(0, 5.0), score(0, 11.0), &mut rng));

    for _ in 0..3 {
        acceptor.step_ended(score(0, 5.0));
    }
    // History now holds 5.0 everywhere.
    assert!(!acceptor.is_accepted(score(0, 5.0), score(0, 9.0), &mut rng));
    assert!(acceptor.is_accepted(score(0, 5.0), score(0, 5.0), &mut rng));
}

#[test]
fn test_late_acceptance_compares_against_oldest_entry() {
    let mut acceptor = LateAcceptanceAcceptor::new(2);
    let mut rng = rng();
    acceptor.phase_started(score(0, 1.0));
    acceptor.step_ended(score(0, 8.0));
    // Index wrapped to the second entry, which still holds the initial 1.0.
    assert!(!acceptor.is_accepted(score(0, 0.5), score(0, 4.0), &mut rng));
    acceptor.step_ended(score(0, 1.0));
    // Back at the first entry: 8.0.
    assert!(acceptor.is_accepted(score(0, 0.5), score(0, 4.0), &mut rng));
}

#[test]
fn test_late_acceptance_zero_size_is_clamped() {
    let acceptor = LateAcceptanceAcceptor::new(0);
    assert_eq!(acceptor.late_acceptance_size(), 1);
}

#[test]
fn test_simulated_annealing_accepts_improving() {
    let mut acceptor = SimulatedAnnealingAcceptor::default();
    acceptor.step_started(0.99);
    assert!(acceptor.is_accepted(score(1, 0.0), score(0, 50.0), &mut rng()));
}

#[test]
fn test_simulated_annealing_temperature_cools_with_time() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(score(2, 10.0));
    assert_eq!(acceptor.temperature(ScoreLevel::Hard), 2.0);
    acceptor.step_started(0.5);
    assert_eq!(acceptor.temperature(ScoreLevel::Hard), 1.0);
    assert_eq!(acceptor.temperature(ScoreLevel::Soft), 5.0);
}

#[test]
fn test_simulated_annealing_chance() {
    let acceptor = SimulatedAnnealingAcceptor::new(score(1, 5.0));
    let chance = acceptor.acceptance_chance(score(0, 1.0), score(0, 6.0));
    assert!((chance - (-1.0f64).exp()).abs() < 1e-9);

    let both = acceptor.acceptance_chance(score(0, 1.0), score(1, 6.0));
    assert!((both - (-2.0f64).exp()).abs() < 1e-9);

    // Improving on one level does not raise the chance above one.
    let mixed = acceptor.acceptance_chance(score(1, 6.0), score(0, 11.0));
    assert!((mixed - (-1.0f64).exp()).abs() < 1e-9);
}

#[test]
fn test_simulated_annealing_rejects_worsening_at_deadline() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(score(100, 100.0));
    acceptor.step_started(1.0);
    let mut rng = rng();
    for _ in 0..50 {
        assert!(!acceptor.is_accepted(score(0, 0.0), score(0, 0.01), &mut rng));
    }
}

#[test]
fn test_simulated_annealing_sometimes_accepts_worsening_early() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(score(1, 5.0));
    acceptor.phase_started(score(0, 0.0));
    let mut rng = rng();
    let accepted = (0..200)
        .filter(|_| acceptor.is_accepted(score(0, 1.0), score(0, 2.0), &mut rng))
        .count();
    // exp(-1/5) ≈ 0.82
    assert!(accepted > 100 && accepted < 200, "accepted {accepted} of 200");
}

#[test]
fn test_acceptors_as_trait_objects() {
    let acceptors: Vec<Box<dyn Acceptor>> = vec![
        Box::new(HillClimbingAcceptor::new()),
        Box::new(LateAcceptanceAcceptor::default()),
        Box::new(SimulatedAnnealingAcceptor::default()),
    ];
    let names: Vec<&str> = acceptors.iter().map(|a| a.name()).collect();
    assert_eq!(names, ["Hill Climbing", "Late Acceptance", "Simulated Annealing"]);
}

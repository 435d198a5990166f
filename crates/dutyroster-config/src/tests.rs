//! Tests for solver configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.random_seed, None);
    assert_eq!(config.worker_count, 1);
    assert_eq!(config.planning.months, 5.0);
    assert_eq!(config.weights.ideal_load, 1.0);
    assert_eq!(config.weights.distribution, 0.3);
    assert_eq!(config.weights.unwanted_weekday, 0.2);
    assert_eq!(config.time_limit(), Duration::from_secs(5));
    assert_eq!(config.local_search.move_sample_size, 24);
    assert_eq!(
        config.local_search.acceptor,
        AcceptorConfig::LateAcceptance(LateAcceptanceConfig {
            late_acceptance_size: 400
        })
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_uses_defaults() {
    assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        worker_count = 4

        [planning]
        months = 3.5

        [weights]
        distribution = 0.2

        [termination]
        seconds_spent_limit = 30
        best_score_limit = "0hard/0soft"

        [local_search]
        move_sample_size = 48
        [local_search.acceptor]
        type = "late_acceptance"
        late_acceptance_size = 100
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.worker_count, 4);
    assert_eq!(config.planning.months, 3.5);
    assert_eq!(config.weights.distribution, 0.2);
    assert_eq!(config.weights.ideal_load, 1.0);
    assert_eq!(config.time_limit(), Duration::from_secs(30));
    assert_eq!(
        config.termination.best_score_limit().unwrap(),
        Some(PenaltyScore::ZERO)
    );
    assert_eq!(config.local_search.move_sample_size, 48);
    assert_eq!(config.local_search.swap_probability, 0.35);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        termination:
          millis_spent_limit: 250
          step_count_limit: 1000
        local_search:
          acceptor:
            type: hill_climbing
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.time_limit(), Duration::from_millis(250));
    assert_eq!(config.termination.step_count_limit, Some(1000));
    assert_eq!(config.local_search.acceptor, AcceptorConfig::HillClimbing);
}

#[test]
fn test_simulated_annealing_temperature() {
    let config = SolverConfig::from_toml_str(
        r#"
        [local_search.acceptor]
        type = "simulated_annealing"
    "#,
    )
    .unwrap();

    let AcceptorConfig::SimulatedAnnealing(sa) = &config.local_search.acceptor else {
        panic!("expected simulated annealing");
    };
    assert_eq!(sa.starting_temperature().unwrap(), PenaltyScore::of(1, 5.0));
}

#[test]
fn test_combined_time_limit() {
    let termination = TerminationConfig {
        minutes_spent_limit: Some(1),
        seconds_spent_limit: Some(5),
        millis_spent_limit: Some(500),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Duration::from_millis(65_500));
}

#[test]
fn test_huge_time_limit_saturates() {
    let termination = TerminationConfig {
        minutes_spent_limit: Some(u64::MAX),
        seconds_spent_limit: Some(u64::MAX),
        millis_spent_limit: Some(u64::MAX),
        ..TerminationConfig::default()
    };
    assert_eq!(termination.time_limit(), Duration::MAX);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_millis(200)
        .with_worker_count(2)
        .with_planning_months(6.0)
        .with_step_count_limit(500)
        .with_unimproved_step_count_limit(50)
        .with_acceptor(AcceptorConfig::HillClimbing);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Duration::from_millis(200));
    assert_eq!(config.worker_count, 2);
    assert_eq!(config.termination.unimproved_step_count_limit, Some(50));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_errors() {
    let cases = [
        SolverConfig::new().with_worker_count(0),
        SolverConfig::new().with_planning_months(0.0),
        SolverConfig::new().with_termination_seconds(0),
        SolverConfig {
            weights: WeightsConfig {
                distribution: -0.1,
                ..WeightsConfig::default()
            },
            ..SolverConfig::default()
        },
        SolverConfig {
            local_search: LocalSearchConfig {
                swap_probability: 1.5,
                ..LocalSearchConfig::default()
            },
            ..SolverConfig::default()
        },
        SolverConfig {
            local_search: LocalSearchConfig {
                swap_probability: 0.7,
                unassign_probability: 0.4,
                ..LocalSearchConfig::default()
            },
            ..SolverConfig::default()
        },
        SolverConfig {
            local_search: LocalSearchConfig {
                move_sample_size: 0,
                ..LocalSearchConfig::default()
            },
            ..SolverConfig::default()
        },
        SolverConfig {
            termination: TerminationConfig {
                best_score_limit: Some("zero".to_string()),
                ..TerminationConfig::default()
            },
            ..SolverConfig::default()
        },
        SolverConfig::new().with_acceptor(AcceptorConfig::SimulatedAnnealing(
            SimulatedAnnealingConfig {
                starting_temperature: "hot".to_string(),
            },
        )),
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(ConfigError::Invalid(_))),
            "{config:?} should be invalid"
        );
    }
}

#[test]
fn test_unknown_acceptor_rejected() {
    let result = SolverConfig::from_toml_str(
        r#"
        [local_search.acceptor]
        type = "great_deluge"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_missing_file() {
    let result = SolverConfig::load("/nonexistent/roster.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

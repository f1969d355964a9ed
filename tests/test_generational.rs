use sinega::{
    error::GeneticError,
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    fitness::fitness,
    rng::RandomNumberGenerator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn scenario(log_level: LogLevel) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(30)
        .num_generations(50)
        .elite_size(2)
        .crossover_rate(0.8)
        .mutation_rate(0.1)
        .selection("tournament")
        .crossover("arithmetic")
        .mutation("gaussian")
        .tournament_size(3)
        .steady_state(false)
        .log_level(log_level)
        .build()
        .unwrap()
}

#[test]
fn test_generational_finds_global_optimum() {
    init_tracing();
    let launcher = EvolutionLauncher::new(scenario(LogLevel::None));

    let successes = (0..10u64)
        .filter(|&seed| {
            let result = launcher
                .evolve(&mut RandomNumberGenerator::from_seed(seed))
                .unwrap();
            result.fitness >= 1.8
        })
        .count();

    assert!(successes >= 8, "only {} of 10 seeded runs reached 1.8", successes);
}

#[test]
fn test_generational_history() {
    init_tracing();
    let launcher = EvolutionLauncher::new(scenario(LogLevel::Minimal));
    let result = launcher
        .evolve(&mut RandomNumberGenerator::from_seed(2024))
        .unwrap();

    assert_eq!(result.history.len(), 50);
    assert_eq!(result.history.average.len(), 50);

    let running = result.history.running_best();
    for pair in running.windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    // Two elites: the best never gets worse from one generation to the next.
    for pair in result.history.best.windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    assert!((0.0..=1.0).contains(&result.individual));
    assert_eq!(result.fitness, fitness(result.individual));
}

#[test]
fn test_verbose_logging_with_every_policy() {
    init_tracing();
    let policies = [
        ("roulette", "single", "swap"),
        ("rank", "uniform", "scramble"),
        ("random", "two-point", "inversion"),
        ("tournament", "arithmetic", "random"),
        ("unknown", "unknown", "bitflip"),
        ("roulette", "arithmetic", "unknown"),
    ];

    for (selection, crossover, mutation) in policies {
        let options = EvolutionOptions::builder()
            .population_size(12)
            .num_generations(6)
            .elite_size(1)
            .selection(selection)
            .crossover(crossover)
            .mutation(mutation)
            .mutation_rate(0.5)
            .log_level(LogLevel::Verbose)
            .build()
            .unwrap();

        let result = EvolutionLauncher::new(options)
            .evolve(&mut RandomNumberGenerator::from_seed(5))
            .unwrap();

        assert_eq!(result.history.len(), 6);
        assert!((0.0..=1.0).contains(&result.individual));
    }
}

#[test]
fn test_invalid_configuration_fails_fast() {
    let result = EvolutionOptions::builder().population_size(0).build();

    match result {
        Err(GeneticError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("Population size"));
        }
        other => panic!("Expected InvalidConfiguration error, got {:?}", other),
    }
}

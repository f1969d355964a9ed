use sinega::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
};

fn steady_state(num_replacements: usize, log_level: LogLevel) -> EvolutionOptions {
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
        .steady_state(true)
        .num_replacements(num_replacements)
        .log_level(log_level)
        .build()
        .unwrap()
}

#[test]
fn test_steady_state_runs_every_generation() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let launcher = EvolutionLauncher::new(steady_state(5, LogLevel::Minimal));
    let mut generations = 0;
    let result = launcher
        .evolve_with_observer(&mut RandomNumberGenerator::from_seed(77), |_| generations += 1)
        .unwrap();

    assert_eq!(generations, 50);
    assert_eq!(result.history.len(), 50);
    assert!((0.0..=1.0).contains(&result.individual));
}

#[test]
fn test_steady_state_best_never_regresses() {
    // Only the worst individual is ever replaced, so the best survives.
    let launcher = EvolutionLauncher::new(steady_state(5, LogLevel::None));

    for seed in 0..5u64 {
        let result = launcher
            .evolve(&mut RandomNumberGenerator::from_seed(seed))
            .unwrap();

        for pair in result.history.best.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(result.fitness >= *result.history.best.last().unwrap());
    }
}

#[test]
fn test_steady_state_average_improves() {
    let launcher = EvolutionLauncher::new(steady_state(10, LogLevel::None));
    let result = launcher
        .evolve(&mut RandomNumberGenerator::from_seed(8))
        .unwrap();

    let first = result.history.average[0];
    let last = *result.history.average.last().unwrap();
    assert!(last > first, "average went from {} to {}", first, last);
}

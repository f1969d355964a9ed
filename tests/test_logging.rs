use std::io;
use std::sync::{Arc, Mutex};

use sinega::{
    evolution::{EvolutionLauncher, EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_captured(options: EvolutionOptions) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        EvolutionLauncher::new(options)
            .evolve(&mut RandomNumberGenerator::from_seed(7))
            .unwrap();
    });

    logs.contents()
}

fn options(log_level: LogLevel) -> sinega::evolution::EvolutionOptionsBuilder {
    EvolutionOptions::builder()
        .population_size(10)
        .num_generations(4)
        .log_level(log_level)
}

#[test]
fn test_none_is_silent() {
    assert!(run_captured(options(LogLevel::None).build().unwrap()).is_empty());
}

#[test]
fn test_minimal_logs_one_line_per_generation() {
    let logs = run_captured(options(LogLevel::Minimal).build().unwrap());

    assert_eq!(logs.matches("| Best: ").count(), 4);
    assert!(logs.contains("Gen 001 | Best: "));
    assert!(logs.contains("Gen 004 | Best: "));
    assert!(!logs.contains("DEBUG"));
}

#[test]
fn test_verbose_reports_elites_carried() {
    let logs = run_captured(options(LogLevel::Verbose).elite_size(2).build().unwrap());

    assert_eq!(logs.matches("elites carried").count(), 4);
    assert!(logs.contains("elites=2"));
    assert!(logs.contains("offspring=8"));
    assert!(!logs.contains("replaced worst individual"));
}

#[test]
fn test_verbose_reports_each_steady_state_replacement() {
    let logs = run_captured(
        options(LogLevel::Verbose)
            .steady_state(true)
            .num_replacements(3)
            .build()
            .unwrap(),
    );

    assert_eq!(logs.matches("replaced worst individual").count(), 12);
    assert!(logs.contains("step=3"));
    assert!(!logs.contains("elites carried"));
}

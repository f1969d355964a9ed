//! # Fitness
//!
//! The objective being maximized, `f(x) = x * sin(10 * pi * x) + 1`.
//! On `[0, 1]` it has several local maxima; the global one sits near `x = 0.85`
//! with `f ~ 1.85`.

use std::f64::consts::PI;

/// Scores a single individual. Higher is better.
pub fn fitness(x: f64) -> f64 {
    x * (10.0 * PI * x).sin() + 1.0
}

/// Scores every individual, preserving order.
pub fn evaluate(individuals: &[f64]) -> Vec<f64> {
    individuals.iter().map(|&x| fitness(x)).collect()
}

/// Evenly spaced `(x, f(x))` samples over `[0, 1]`, endpoints included.
///
/// Meant for plotting the objective next to a run's best solution.
pub fn sample_curve(points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(0.0, fitness(0.0))],
        _ => {
            let step = 1.0 / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    let x = if i == points - 1 { 1.0 } else { i as f64 * step };
                    (x, fitness(x))
                })
                .collect()
        }
    }
}

//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use dist_core::Distribution;
use dist_univariate::SmoothedUniform;

/// Step used for every finite-difference check
pub const FD_STEP: f64 = 1e-5;

/// The distribution used throughout the reference scenario
pub fn reference() -> SmoothedUniform {
    SmoothedUniform::new(-0.5, 1.5, 0.5).unwrap()
}

/// Composite trapezoid rule on `[lo, hi]` with `steps` panels
pub fn trapezoid<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, steps: usize) -> f64 {
    let h = (hi - lo) / steps as f64;
    let interior: f64 = (1..steps).map(|i| f(lo + i as f64 * h)).sum();
    h * (0.5 * f(lo) + interior + 0.5 * f(hi))
}

/// Central difference of `evaluate` with respect to each parameter of `dist`
pub fn parameter_gradient_fd<F>(dist: &SmoothedUniform, evaluate: F) -> Vec<f64>
where
    F: Fn(&SmoothedUniform) -> f64,
{
    let base = dist.parameters();
    (0..base.len())
        .map(|i| {
            let mut up = base.clone();
            let mut down = base.clone();
            up[i] += FD_STEP;
            down[i] -= FD_STEP;
            let plus = dist.with_parameters(&up).unwrap();
            let minus = dist.with_parameters(&down).unwrap();
            (evaluate(&plus) - evaluate(&minus)) / (2.0 * FD_STEP)
        })
        .collect()
}

/// Largest gap between the empirical CDF of `values` and `dist.cdf`
pub fn kolmogorov_statistic<D: Distribution + ?Sized>(dist: &D, values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = dist.cdf(x);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

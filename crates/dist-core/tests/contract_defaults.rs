//! Tests for the provided operations of the `Distribution` trait
//!
//! A standard logistic law implements only the required methods, so every
//! quantile, mode, sampling and log-density answer below comes from the
//! trait's default implementations.

use approx::assert_relative_eq;
use dist_core::{Complex64, Distribution, Error, Interval, Point, SolverConfig};
use proptest::prelude::*;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

struct StandardLogistic;

impl Distribution for StandardLogistic {
    fn parameters(&self) -> Vec<f64> {
        Vec::new()
    }

    fn parameter_description(&self) -> Vec<String> {
        Vec::new()
    }

    fn description(&self) -> &str {
        "StandardLogistic"
    }

    fn pdf(&self, x: f64) -> f64 {
        let e = (-x.abs()).exp();
        e / ((1.0 + e) * (1.0 + e))
    }

    fn cdf(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    fn ddf(&self, x: f64) -> f64 {
        let f = self.cdf(x);
        f * (1.0 - f) * (1.0 - 2.0 * f)
    }

    fn characteristic_function(&self, t: f64) -> Complex64 {
        if t == 0.0 {
            return Complex64::new(1.0, 0.0);
        }
        Complex64::new(PI * t / (PI * t).sinh(), 0.0)
    }

    fn pdf_gradient(&self, _x: f64) -> dist_core::Result<Vec<f64>> {
        Err(Error::Unsupported("parameter-free law".to_string()))
    }

    fn cdf_gradient(&self, _x: f64) -> dist_core::Result<Vec<f64>> {
        Err(Error::Unsupported("parameter-free law".to_string()))
    }

    fn mean(&self) -> f64 {
        0.0
    }

    fn covariance(&self) -> f64 {
        PI * PI / 3.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        4.2
    }

    fn range(&self) -> Interval {
        Interval::new(-40.0, 40.0).unwrap()
    }

    fn realization(&self, rng: &mut dyn RngCore) -> Point {
        let u: f64 = rng.gen_range(f64::EPSILON..1.0);
        Point::from((u / (1.0 - u)).ln())
    }

    fn is_elliptical(&self) -> bool {
        true
    }

    fn is_orthogonal(&self) -> bool {
        true
    }
}

#[test]
fn test_default_quantile_inverts_cdf() {
    let dist = StandardLogistic;
    for &p in &[1e-6, 0.01, 0.25, 0.5, 0.9, 0.999] {
        let q = dist.quantile(p).unwrap();
        assert_relative_eq!(q, (p / (1.0 - p)).ln(), epsilon = 1e-8);
    }
    assert_eq!(dist.quantile(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(dist.quantile(1.0).unwrap(), f64::INFINITY);
    assert!(dist.quantile(1.5).unwrap_err().is_domain());
    assert!(dist.quantile(f64::NAN).unwrap_err().is_domain());
}

#[test]
fn test_default_inverse_survival() {
    let dist = StandardLogistic;
    let x = dist.inverse_survival_function(0.05).unwrap();
    assert_relative_eq!(dist.survival_function(x), 0.05, epsilon = 1e-9);
    assert_relative_eq!(x, dist.quantile(0.95).unwrap(), epsilon = 1e-8);
    assert_eq!(dist.inverse_survival_function(0.0).unwrap(), f64::INFINITY);
    assert!(dist.inverse_survival_function(-0.2).is_err());
}

#[test]
fn test_default_log_pdf_and_survival() {
    let dist = StandardLogistic;
    assert_relative_eq!(dist.log_pdf(0.0), 0.25_f64.ln(), epsilon = 1e-14);
    assert_eq!(dist.log_pdf(1e6), f64::NEG_INFINITY);
    assert_relative_eq!(dist.survival_function(1.0) + dist.cdf(1.0), 1.0, epsilon = 1e-15);
}

#[test]
fn test_default_mode_and_moments() {
    let dist = StandardLogistic;
    assert_relative_eq!(dist.mode().unwrap(), 0.0, epsilon = 1e-6);
    assert_relative_eq!(dist.standard_deviation(), PI / 3.0_f64.sqrt(), epsilon = 1e-14);
    assert_eq!(dist.dimension(), 1);
    assert_eq!(dist.solver_config(), SolverConfig::default());
}

#[test]
fn test_default_sample_is_reproducible() {
    let dist = StandardLogistic;
    let first = dist.sample(64, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let second = dist.sample(64, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(first.len(), 64);
    assert_eq!(first.dimension(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_trait_object_usage() {
    let dist: &dyn Distribution = &StandardLogistic;
    assert!(dist.pdf_gradient(0.0).is_err());
    let interval = Interval::new(-1.0, 1.0).unwrap();
    let mass = interval.probability(dist);
    assert_relative_eq!(mass, dist.cdf(1.0) - dist.cdf(-1.0), epsilon = 1e-14);
}

proptest! {
    #[test]
    fn prop_quantile_round_trip(p in 1e-9..(1.0 - 1e-9)) {
        let dist = StandardLogistic;
        let q = dist.quantile(p).unwrap();
        prop_assert!((dist.cdf(q) - p).abs() < 1e-9);
    }

    #[test]
    fn prop_bisect_linear_targets(slope in 0.1..10.0_f64, target in -100.0..100.0_f64) {
        let config = SolverConfig::default();
        let root = dist_core::kernel::bisect(|x| slope * x, -1.0, 1.0, target, &config).unwrap();
        prop_assert!((root - target / slope).abs() < 1e-8);
    }
}

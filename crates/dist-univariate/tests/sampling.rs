//! Monte-Carlo consistency of sampling with the analytic moments

mod common;

use common::*;
use dist_core::Distribution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZE: usize = 100_000;

#[test]
fn test_sample_shape_and_reproducibility() {
    let dist = reference();
    let first = dist.sample(1_000, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let second = dist.sample(1_000, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    assert_eq!(first.len(), 1_000);
    assert_eq!(first.dimension(), dist.dimension());
    assert_eq!(first, second);

    let other = dist.sample(1_000, &mut ChaCha8Rng::seed_from_u64(43)).unwrap();
    assert_ne!(first, other);
    assert_eq!(dist.realization(&mut ChaCha8Rng::seed_from_u64(1)).dimension(), 1);
}

#[test]
fn test_sample_moments_match_closed_forms() {
    let dist = reference();
    let sample = dist.sample(SIZE, &mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let n = SIZE as f64;

    let variance = dist.covariance();
    let mean_se = (variance / n).sqrt();
    let empirical_mean = sample.compute_mean().unwrap()[0];
    assert!(
        (empirical_mean - dist.mean()).abs() < 4.0 * mean_se,
        "mean {empirical_mean} vs {}",
        dist.mean()
    );

    // Var(s^2) ~ (mu4 - sigma^4) / n
    let variance_se = ((dist.kurtosis() - 1.0) * variance * variance / n).sqrt();
    let empirical_variance = sample.compute_covariance().unwrap()[0];
    assert!(
        (empirical_variance - variance).abs() < 4.0 * variance_se,
        "variance {empirical_variance} vs {variance}"
    );
}

#[test]
fn test_sample_shape_moments() {
    let dist = reference();
    let values = dist
        .sample(SIZE, &mut ChaCha8Rng::seed_from_u64(7))
        .unwrap()
        .marginal(0)
        .unwrap();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let m2 = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let m3 = values.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
    let m4 = values.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n;

    assert!((m3 / m2.powf(1.5) - dist.skewness()).abs() < 0.04);
    assert!((m4 / (m2 * m2) - dist.kurtosis()).abs() < 0.08);
}

#[test]
fn test_sample_passes_kolmogorov_check() {
    let dist = reference();
    for (seed, size) in [(11_u64, 100_usize), (12, 1_000), (13, 10_000)] {
        let values = dist
            .sample(size, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap()
            .marginal(0)
            .unwrap();
        let statistic = kolmogorov_statistic(&dist, &values);
        // 0.1% critical value of the Kolmogorov distribution
        assert!(
            statistic < 1.95 / (size as f64).sqrt(),
            "D = {statistic} for n = {size}"
        );
    }
}

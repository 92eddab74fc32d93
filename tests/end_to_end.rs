//! End-to-end use of the facade with tracing output enabled
//!
//! Run with `RUST_LOG=debug cargo test -- --nocapture` to see the solver
//! decisions.

use approx::assert_relative_eq;
use dist_stats::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_reference_scenario() -> Result<()> {
    init_tracing();
    let dist = SmoothedUniform::new(-0.5, 1.5, 0.5)?;

    assert_relative_eq!(dist.mean(), 0.5, epsilon = 1e-15);
    assert_relative_eq!(dist.covariance(), 7.0 / 12.0, epsilon = 1e-15);
    let q = dist.quantile(0.95)?;
    assert_relative_eq!(dist.cdf(q), 0.95, epsilon = 1e-6);

    let ci = dist.bilateral_confidence_interval(0.95)?;
    assert_relative_eq!(ci.beta, 0.95, epsilon = 1e-6);
    let shortest = dist.minimum_volume_interval(0.95)?;
    assert_relative_eq!(shortest.interval.width(), ci.width(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_sample_moments_through_facade() -> Result<()> {
    init_tracing();
    let dist = SmoothedUniform::new(2.0, 5.0, 0.25)?;
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let sample = dist.sample(20_000, &mut rng)?;

    let mean = sample.compute_mean()?;
    let se = (dist.covariance() / sample.len() as f64).sqrt();
    assert!((mean[0] - dist.mean()).abs() < 4.0 * se);
    Ok(())
}

#[test]
fn test_errors_surface_through_facade() {
    init_tracing();
    let err = SmoothedUniform::new(1.0, 1.0, 0.5).unwrap_err();
    assert!(err.is_construction());

    let dist = SmoothedUniform::standard();
    assert!(dist.quantile(1.5).unwrap_err().is_domain());
    assert!(matches!(
        dist.minimum_volume_level_set(0.0),
        Err(Error::DegenerateRegion {
            region: dist_stats::RegionKind::Empty,
            ..
        })
    ));
}

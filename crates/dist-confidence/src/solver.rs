//! Confidence-region algorithms over any distribution
//!
//! Every algorithm reaches the distribution only through its published
//! contract (density, distribution functions, quantiles). The
//! minimum-volume searches assume a unimodal density.

use crate::types::{ConfidenceInterval, LevelSet, MinimumVolumeInterval};
use dist_core::kernel::try_bisect;
use dist_core::{Distribution, Error, Interval, Result, SolverConfig};
use tracing::{debug, instrument};

/// Density with the infinite ends of the line mapped to zero
fn density_at<D: Distribution + ?Sized>(dist: &D, x: f64) -> f64 {
    if x.is_finite() {
        dist.pdf(x)
    } else {
        0.0
    }
}

/// Interval from two endpoints that may cross by the solver tolerance
fn ordered_interval(lower: f64, upper: f64) -> Result<Interval> {
    if lower > upper {
        Interval::new(upper, lower)
    } else {
        Interval::new(lower, upper)
    }
}

/// Confidence-region solver
///
/// Carries the bisection policy for the solver's own searches; quantile
/// evaluations use each distribution's configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceRegionSolver {
    config: SolverConfig,
}

impl ConfidenceRegionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Equal-tailed interval `[q((1-p)/2), isf((1-p)/2)]`
    ///
    /// The achieved mass is measured from both tails rather than assumed.
    #[instrument(level = "debug", skip(self, dist))]
    pub fn bilateral<D: Distribution + ?Sized>(
        &self,
        dist: &D,
        p: f64,
    ) -> Result<ConfidenceInterval> {
        Error::check_open_probability(p)?;
        let tail = 0.5 * (1.0 - p);
        let lower = dist.quantile(tail)?;
        let upper = dist.inverse_survival_function(tail)?;
        let interval = ordered_interval(lower, upper)?;
        let beta = interval.probability(dist);
        debug!("Bilateral interval {} achieves beta = {}", interval, beta);
        Ok(ConfidenceInterval::new(interval, beta))
    }

    /// One-sided interval
    ///
    /// `upper_tail = false` gives `(-inf, q(p)]`, `upper_tail = true` gives
    /// `[isf(p), +inf)`.
    #[instrument(level = "debug", skip(self, dist))]
    pub fn unilateral<D: Distribution + ?Sized>(
        &self,
        dist: &D,
        p: f64,
        upper_tail: bool,
    ) -> Result<ConfidenceInterval> {
        Error::check_open_probability(p)?;
        let (interval, beta) = if upper_tail {
            let lower = dist.inverse_survival_function(p)?;
            (Interval::new(lower, f64::INFINITY)?, dist.complementary_cdf(lower))
        } else {
            let upper = dist.quantile(p)?;
            (Interval::new(f64::NEG_INFINITY, upper)?, dist.cdf(upper))
        };
        debug!("Unilateral interval {} achieves beta = {}", interval, beta);
        Ok(ConfidenceInterval::new(interval, beta))
    }

    /// Shortest interval of mass `p`
    ///
    /// Searches the lower-tail mass `s` in `[0, 1 - p]` for the interval
    /// `[q(s), isf(1 - p - s)]` whose endpoints have equal density. The gap
    /// `pdf(upper) - pdf(lower)` decreases in `s` when the density is
    /// unimodal.
    #[instrument(level = "debug", skip(self, dist))]
    pub fn minimum_volume_interval<D: Distribution + ?Sized>(
        &self,
        dist: &D,
        p: f64,
    ) -> Result<MinimumVolumeInterval> {
        Error::check_open_probability(p)?;
        let free_mass = 1.0 - p;
        let endpoints = |s: f64| -> Result<(f64, f64)> {
            let s = s.clamp(0.0, free_mass);
            let lower = dist.quantile(s)?;
            let upper = dist.inverse_survival_function((free_mass - s).max(0.0))?;
            Ok((lower, upper))
        };

        let s = try_bisect(
            |s| {
                let (lower, upper) = endpoints(s)?;
                Ok(density_at(dist, upper) - density_at(dist, lower))
            },
            0.0,
            free_mass,
            0.0,
            &self.config,
        )?;

        let (lower, upper) = endpoints(s)?;
        let interval = ordered_interval(lower, upper)?;
        let threshold = density_at(dist, lower).min(density_at(dist, upper));
        let beta = interval.probability(dist);
        debug!(
            "Minimum volume interval {} at lower tail mass {}, threshold = {}, beta = {}",
            interval, s, threshold, beta
        );
        Ok(MinimumVolumeInterval {
            interval,
            threshold,
            beta,
        })
    }

    /// Smallest region `{pdf >= t}` of mass `p`
    ///
    /// Moves the left boundary `x` up to the mode and pairs it with the
    /// point `u` that encloses mass `p`, until both carry the same density.
    /// Where the density is flat at the boundary level the returned interval
    /// is one region of mass `p` inside the flat part.
    #[instrument(level = "debug", skip(self, dist))]
    pub fn minimum_volume_level_set<D: Distribution + ?Sized>(
        &self,
        dist: &D,
        p: f64,
    ) -> Result<LevelSet> {
        Error::check_open_probability(p)?;
        let mode = dist.mode()?;
        // Past q(1 - p) no interval starting at x holds mass p
        let last_start = dist.quantile(1.0 - p)?;
        let right_end = mode.min(last_start);
        let range = dist.range();
        let left_end = if range.lower() < right_end {
            range.lower()
        } else {
            right_end - 1.0
        };

        let partner = |x: f64| -> Result<f64> {
            let beyond = dist.complementary_cdf(x) - p;
            if beyond <= 0.0 {
                return Ok(f64::INFINITY);
            }
            dist.inverse_survival_function(beyond)
        };

        let x = try_bisect(
            |x| Ok(density_at(dist, partner(x)?) - dist.pdf(x)),
            left_end,
            right_end,
            0.0,
            &self.config,
        )?;

        let interval = ordered_interval(x, partner(x)?)?;
        let threshold = dist.pdf(x).min(density_at(dist, interval.upper()));
        let beta = interval.probability(dist);
        debug!(
            "Level set {} at threshold {} achieves beta = {} (requested {})",
            interval, threshold, beta, p
        );
        Ok(LevelSet {
            interval,
            threshold,
            beta,
        })
    }
}

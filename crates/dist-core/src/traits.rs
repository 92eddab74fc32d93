//! The distribution contract
//!
//! Every distribution in the workspace implements [`Distribution`]. The trait
//! is object safe so consumers such as goodness-of-fit tests and the
//! confidence-region solver can hold a `&dyn Distribution`.

use crate::kernel::{bisect, golden_section_max};
use crate::{Error, Interval, Point, Result, Sample, SolverConfig};
use num_complex::Complex64;
use rand::RngCore;

/// Capability set shared by every univariate continuous distribution
///
/// Implementations are pure functions of the parameter state: every query
/// takes `&self`, so an instance can be read from several threads at once.
pub trait Distribution: Send + Sync {
    /// Number of components of a realization
    fn dimension(&self) -> usize {
        1
    }

    /// Ordered parameter vector
    fn parameters(&self) -> Vec<f64>;

    /// Names of the parameters, in the order of [`Distribution::parameters`]
    fn parameter_description(&self) -> Vec<String>;

    /// Free-form label
    fn description(&self) -> &str;

    /// Probability density function
    fn pdf(&self, x: f64) -> f64;

    /// Logarithm of the density; `-inf` where the density is exactly zero
    fn log_pdf(&self, x: f64) -> f64 {
        let density = self.pdf(x);
        if density > 0.0 {
            density.ln()
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Cumulative distribution function `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;

    /// `P(X > x)`
    ///
    /// Implementations should override this with a direct formula so the
    /// upper tail does not lose precision to cancellation.
    fn complementary_cdf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Survival function, identical to the complementary CDF
    fn survival_function(&self, x: f64) -> f64 {
        self.complementary_cdf(x)
    }

    /// Derivative of the density with respect to `x`
    fn ddf(&self, x: f64) -> f64;

    /// `E[exp(i t X)]`
    fn characteristic_function(&self, t: f64) -> Complex64;

    /// Inverse of the CDF
    ///
    /// `p = 0` and `p = 1` map to the infinite ends of the real line;
    /// anything outside `[0, 1]` is a domain error.
    fn quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        let range = self.range();
        bisect(
            |x| self.cdf(x),
            range.lower(),
            range.upper(),
            p,
            &self.solver_config(),
        )
    }

    /// Inverse of the survival function, solved on the complementary CDF
    fn inverse_survival_function(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        let range = self.range();
        bisect(
            |x| self.complementary_cdf(x),
            range.lower(),
            range.upper(),
            p,
            &self.solver_config(),
        )
    }

    /// Partial derivatives of the density with respect to each parameter
    fn pdf_gradient(&self, x: f64) -> Result<Vec<f64>>;

    /// Partial derivatives of the CDF with respect to each parameter
    fn cdf_gradient(&self, x: f64) -> Result<Vec<f64>>;

    fn mean(&self) -> f64;

    /// Variance, i.e. the single entry of the 1x1 covariance matrix
    fn covariance(&self) -> f64;

    fn standard_deviation(&self) -> f64 {
        self.covariance().sqrt()
    }

    fn skewness(&self) -> f64;

    /// Non-excess kurtosis (3 for the normal law)
    fn kurtosis(&self) -> f64;

    /// Location of the density maximum
    ///
    /// The default assumes a unimodal density and searches `range()`.
    fn mode(&self) -> Result<f64> {
        let range = self.range();
        golden_section_max(
            |x| self.pdf(x),
            range.lower(),
            range.upper(),
            &self.solver_config(),
        )
    }

    /// Finite interval holding all but a negligible share of the mass
    fn range(&self) -> Interval;

    /// One realization drawn from the externally owned generator
    fn realization(&self, rng: &mut dyn RngCore) -> Point;

    /// `size` independent realizations
    ///
    /// Fails only if `realization` returns points of the wrong dimension.
    fn sample(&self, size: usize, rng: &mut dyn RngCore) -> Result<Sample> {
        let mut sample = Sample::with_capacity(self.dimension(), size);
        for _ in 0..size {
            sample.push(&self.realization(rng))?;
        }
        Ok(sample)
    }

    fn is_elliptical(&self) -> bool;

    /// Whether the components are mutually independent
    fn is_orthogonal(&self) -> bool;

    /// Policy used by the numerically inverted operations
    fn solver_config(&self) -> SolverConfig {
        SolverConfig::default()
    }
}

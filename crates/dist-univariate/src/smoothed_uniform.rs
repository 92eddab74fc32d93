//! Smoothed uniform distribution
//!
//! `X = U + N` with `U ~ Uniform(a, b)` and `N ~ Normal(0, sigma)`
//! independent. Convolving the uniform density with the Gaussian kernel gives
//! closed forms for the density, the distribution function and all their
//! parameter derivatives; only the quantile needs a numerical inversion.
//!
//! With `alpha = (x - a) / sigma`, `beta = (x - b) / sigma` and
//! `G(z) = z Phi(z) + phi(z)`:
//!
//! ```text
//! pdf(x) = (Phi(alpha) - Phi(beta)) / (b - a)
//! cdf(x) = sigma / (b - a) * (G(alpha) - G(beta))
//! ```

use dist_core::kernel::{
    normal_ccdf, normal_cdf, normal_partial_expectation, normal_pdf,
};
use dist_core::{Complex64, Distribution, Error, Interval, Point, Result, SolverConfig};
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use std::fmt;
use tracing::debug;

const PARAMETER_NAMES: [&str; 3] = ["a", "b", "sigma"];

/// Uniform(a, b) convolved with Normal(0, sigma)
///
/// # Examples
///
/// ```rust
/// use dist_core::Distribution;
/// use dist_univariate::SmoothedUniform;
///
/// let dist = SmoothedUniform::new(-0.5, 1.5, 0.5).unwrap();
/// assert_eq!(dist.mean(), 0.5);
/// let q = dist.quantile(0.95).unwrap();
/// assert!((dist.cdf(q) - 0.95).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedUniform {
    a: f64,
    b: f64,
    sigma: f64,
    /// Cached `b - a`
    width: f64,
    /// Cached `1 / (b - a)`
    inv_width: f64,
    description: String,
    solver: SolverConfig,
}

impl SmoothedUniform {
    /// Create a new smoothed uniform distribution
    ///
    /// # Errors
    ///
    /// Returns a construction error unless `a < b`, `sigma > 0` and all three
    /// parameters are finite.
    pub fn new(a: f64, b: f64, sigma: f64) -> Result<Self> {
        Self::validate(a, b, sigma)?;
        let width = b - a;
        Ok(Self {
            a,
            b,
            sigma,
            width,
            inv_width: 1.0 / width,
            description: "SmoothedUniform".to_string(),
            solver: SolverConfig::default(),
        })
    }

    /// Default instance `SmoothedUniform(-1, 1, 1)`
    pub fn standard() -> Self {
        Self {
            a: -1.0,
            b: 1.0,
            sigma: 1.0,
            width: 2.0,
            inv_width: 0.5,
            description: "SmoothedUniform".to_string(),
            solver: SolverConfig::default(),
        }
    }

    fn validate(a: f64, b: f64, sigma: f64) -> Result<()> {
        if !(a.is_finite() && b.is_finite() && sigma.is_finite()) {
            return Err(Error::Construction(format!(
                "parameters must be finite (got a={a}, b={b}, sigma={sigma})"
            )));
        }
        if a >= b {
            return Err(Error::Construction(format!(
                "a must be less than b (got a={a}, b={b})"
            )));
        }
        if sigma <= 0.0 {
            return Err(Error::Construction(format!(
                "sigma must be positive (got {sigma})"
            )));
        }
        // b - a must not overflow to infinity
        if !(b - a).is_finite() {
            return Err(Error::Construction(format!(
                "b - a overflows (got a={a}, b={b})"
            )));
        }
        Ok(())
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// New instance with the parameter vector `[a, b, sigma]`
    ///
    /// Description and solver configuration carry over.
    pub fn with_parameters(&self, parameters: &[f64]) -> Result<Self> {
        if parameters.len() != PARAMETER_NAMES.len() {
            return Err(Error::parameter_count(PARAMETER_NAMES.len(), parameters.len()));
        }
        let mut next = Self::new(parameters[0], parameters[1], parameters[2])?;
        next.description = self.description.clone();
        next.solver = self.solver;
        Ok(next)
    }

    /// Replace the parameter vector in place
    ///
    /// The new vector is validated first; on error `self` is left untouched.
    pub fn set_parameters(&mut self, parameters: &[f64]) -> Result<()> {
        let next = self.with_parameters(parameters)?;
        *self = next;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Use `solver` for quantile and mode searches
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Result<Self> {
        solver.validate()?;
        self.solver = solver;
        Ok(self)
    }

    /// The affinely standardized law supported around `[-1, 1]`
    ///
    /// `X` maps to `(2X - a - b) / (b - a)`, which keeps the family and
    /// rescales `sigma` to `2 sigma / (b - a)`.
    pub fn standard_representative(&self) -> Result<Self> {
        let mut standard = Self::new(-1.0, 1.0, 2.0 * self.sigma * self.inv_width)?;
        standard.solver = self.solver;
        Ok(standard)
    }

    fn standardized(&self, x: f64) -> (f64, f64) {
        ((x - self.a) / self.sigma, (x - self.b) / self.sigma)
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// `cdf` evaluated without the tail switch
    fn lower_tail(&self, alpha: f64, beta: f64) -> f64 {
        self.sigma
            * self.inv_width
            * (normal_partial_expectation(alpha) - normal_partial_expectation(beta))
    }

    /// `1 - cdf` evaluated without the tail switch
    fn upper_tail(&self, alpha: f64, beta: f64) -> f64 {
        self.sigma
            * self.inv_width
            * (normal_partial_expectation(-beta) - normal_partial_expectation(-alpha))
    }
}

impl Default for SmoothedUniform {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for SmoothedUniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SmoothedUniform(a = {}, b = {}, sigma = {})",
            self.a, self.b, self.sigma
        )
    }
}

impl Distribution for SmoothedUniform {
    fn parameters(&self) -> Vec<f64> {
        vec![self.a, self.b, self.sigma]
    }

    fn parameter_description(&self) -> Vec<String> {
        PARAMETER_NAMES.iter().map(|name| name.to_string()).collect()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn pdf(&self, x: f64) -> f64 {
        let (alpha, beta) = self.standardized(x);
        // Right of b both Phi values approach 1; use upper tails instead
        let mass = if beta > 0.0 {
            normal_ccdf(beta) - normal_ccdf(alpha)
        } else {
            normal_cdf(alpha) - normal_cdf(beta)
        };
        let density = mass * self.inv_width;
        // Rounding can dip below zero far in the tails; NaN passes through
        if density < 0.0 {
            0.0
        } else {
            density
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let (alpha, beta) = self.standardized(x);
        if x <= self.midpoint() {
            self.lower_tail(alpha, beta).clamp(0.0, 1.0)
        } else {
            1.0 - self.upper_tail(alpha, beta).clamp(0.0, 1.0)
        }
    }

    fn complementary_cdf(&self, x: f64) -> f64 {
        let (alpha, beta) = self.standardized(x);
        if x <= self.midpoint() {
            1.0 - self.lower_tail(alpha, beta).clamp(0.0, 1.0)
        } else {
            self.upper_tail(alpha, beta).clamp(0.0, 1.0)
        }
    }

    fn ddf(&self, x: f64) -> f64 {
        let (alpha, beta) = self.standardized(x);
        (normal_pdf(alpha) - normal_pdf(beta)) * self.inv_width / self.sigma
    }

    fn characteristic_function(&self, t: f64) -> Complex64 {
        let half = 0.5 * t * self.width;
        let sinc = if half.abs() < 1e-8 {
            1.0 - half * half / 6.0
        } else {
            half.sin() / half
        };
        let damping = (-0.5 * (self.sigma * t).powi(2)).exp();
        Complex64::from_polar(sinc * damping, t * self.midpoint())
    }

    fn pdf_gradient(&self, x: f64) -> Result<Vec<f64>> {
        if !x.is_finite() {
            return Err(Error::non_finite("x"));
        }
        let (alpha, beta) = self.standardized(x);
        let pdf = self.pdf(x);
        let phi_alpha = normal_pdf(alpha);
        let phi_beta = normal_pdf(beta);
        Ok(vec![
            (pdf - phi_alpha / self.sigma) * self.inv_width,
            (phi_beta / self.sigma - pdf) * self.inv_width,
            (beta * phi_beta - alpha * phi_alpha) * self.inv_width / self.sigma,
        ])
    }

    fn cdf_gradient(&self, x: f64) -> Result<Vec<f64>> {
        if !x.is_finite() {
            return Err(Error::non_finite("x"));
        }
        let (alpha, beta) = self.standardized(x);
        let cdf = self.cdf(x);
        Ok(vec![
            (cdf - normal_cdf(alpha)) * self.inv_width,
            (normal_cdf(beta) - cdf) * self.inv_width,
            (normal_pdf(alpha) - normal_pdf(beta)) * self.inv_width,
        ])
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        // Symmetric about the midpoint: solve on whichever tail is smaller
        if p > 0.5 {
            return self.inverse_survival_function(1.0 - p);
        }
        let range = self.range();
        debug!("Inverting {} at p = {} on {}", self, p, range);
        dist_core::kernel::bisect(|x| self.cdf(x), range.lower(), range.upper(), p, &self.solver)
    }

    fn mean(&self) -> f64 {
        self.midpoint()
    }

    fn covariance(&self) -> f64 {
        self.width * self.width / 12.0 + self.sigma * self.sigma
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        // Fourth cumulants add; the normal contributes none
        let variance = self.covariance();
        3.0 - self.width.powi(4) / 120.0 / (variance * variance)
    }

    fn mode(&self) -> Result<f64> {
        Ok(self.midpoint())
    }

    fn range(&self) -> Interval {
        let margin = self.solver.bracket_width * self.sigma;
        Interval::saturating(self.a - margin, self.b + margin)
    }

    fn realization(&self, rng: &mut dyn RngCore) -> Point {
        let u: f64 = rng.gen();
        let z: f64 = rng.sample(StandardNormal);
        Point::from(self.a + self.width * u + self.sigma * z)
    }

    fn is_elliptical(&self) -> bool {
        true
    }

    fn is_orthogonal(&self) -> bool {
        true
    }

    fn solver_config(&self) -> SolverConfig {
        self.solver
    }
}

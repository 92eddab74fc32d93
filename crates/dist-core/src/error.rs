//! Error types for distribution modeling
//!
//! Provides a unified error type for all dist-stats crates.

use std::fmt;
use thiserror::Error;

/// Kind of region a degenerate probability collapses to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Probability 0: the region carries no mass
    Empty,
    /// Probability 1: the region is the whole real line
    Unbounded,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Empty => write!(f, "an empty"),
            RegionKind::Unbounded => write!(f, "an unbounded"),
        }
    }
}

/// Core error type for distribution operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Argument outside the valid mathematical domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Region query with a probability of exactly 0 or 1
    #[error("Degenerate region: probability {p} yields {region} region")]
    DegenerateRegion { p: f64, region: RegionKind },

    /// Bounded iterative solver exhausted its budget
    #[error("Convergence error after {iterations} iterations: {message}")]
    Convergence { iterations: usize, message: String },

    /// Invalid parameter vector at construction or mutation
    #[error("Construction error: {0}")]
    Construction(String),

    /// Operation has no closed form for this family
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::Domain(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf arguments
    pub fn non_finite(context: &str) -> Self {
        Self::Domain(format!("{context} must be finite"))
    }

    /// Create an error for a parameter vector of the wrong length
    pub fn parameter_count(expected: usize, actual: usize) -> Self {
        Self::Construction(format!(
            "expected {expected} parameters, got {actual}"
        ))
    }

    /// Domain errors, including degenerate region requests
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::DegenerateRegion { .. })
    }

    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    /// Check that `p` is a probability
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Self::invalid_probability(p));
        }
        Ok(())
    }

    /// Check that `p` is a probability strictly inside (0, 1)
    ///
    /// The endpoints are reported as [`Error::DegenerateRegion`] so the caller
    /// learns whether the region would be empty or unbounded.
    pub fn check_open_probability(p: f64) -> Result<()> {
        Self::check_probability(p)?;
        if p == 0.0 {
            return Err(Self::DegenerateRegion {
                p,
                region: RegionKind::Empty,
            });
        }
        if p == 1.0 {
            return Err(Self::DegenerateRegion {
                p,
                region: RegionKind::Unbounded,
            });
        }
        Ok(())
    }
}

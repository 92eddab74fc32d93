//! Confidence regions for continuous distributions
//!
//! Given any [`dist_core::Distribution`] and a probability `p`, this crate
//! constructs regions of mass `p`:
//!
//! - **Bilateral intervals**: equal probability in each tail
//! - **Unilateral intervals**: one bounded side, the other infinite
//! - **Minimum-volume intervals**: the shortest interval of mass `p`
//! - **Minimum-volume level sets**: the region `{x : pdf(x) >= t}` of mass `p`
//!
//! Every result reports `beta`, the mass actually covered, which can differ
//! from `p` by the solver tolerance.
//!
//! The minimum-volume constructions assume a unimodal density. For a
//! multimodal density the region of highest density is a union of intervals
//! and these searches return a single interval around the global mode.
//!
//! # Example
//!
//! ```rust
//! use dist_confidence::{bilateral_confidence_interval, minimum_volume_interval};
//! use dist_univariate::SmoothedUniform;
//!
//! let dist = SmoothedUniform::new(-0.5, 1.5, 0.5).unwrap();
//! let bilateral = bilateral_confidence_interval(&dist, 0.95).unwrap();
//! let shortest = minimum_volume_interval(&dist, 0.95).unwrap();
//!
//! assert!((bilateral.beta - 0.95).abs() < 1e-6);
//! assert!(shortest.interval.width() <= bilateral.width() + 1e-6);
//! ```

mod solver;
mod types;

pub use solver::ConfidenceRegionSolver;
pub use types::{ConfidenceInterval, LevelSet, MinimumVolumeInterval};

use dist_core::{Distribution, Result};

/// Equal-tailed interval of mass `p`, using the default solver
pub fn bilateral_confidence_interval<D: Distribution + ?Sized>(
    dist: &D,
    p: f64,
) -> Result<ConfidenceInterval> {
    ConfidenceRegionSolver::default().bilateral(dist, p)
}

/// One-sided interval of mass `p`, using the default solver
pub fn unilateral_confidence_interval<D: Distribution + ?Sized>(
    dist: &D,
    p: f64,
    upper_tail: bool,
) -> Result<ConfidenceInterval> {
    ConfidenceRegionSolver::default().unilateral(dist, p, upper_tail)
}

/// Shortest interval of mass `p`, using the default solver
pub fn minimum_volume_interval<D: Distribution + ?Sized>(
    dist: &D,
    p: f64,
) -> Result<MinimumVolumeInterval> {
    ConfidenceRegionSolver::default().minimum_volume_interval(dist, p)
}

/// Highest-density region of mass `p`, using the default solver
pub fn minimum_volume_level_set<D: Distribution + ?Sized>(
    dist: &D,
    p: f64,
) -> Result<LevelSet> {
    ConfidenceRegionSolver::default().minimum_volume_level_set(dist, p)
}

/// Confidence regions as methods on any distribution
///
/// Each method runs a solver configured from the distribution's own
/// [`Distribution::solver_config`].
pub trait ConfidenceRegions: Distribution {
    fn bilateral_confidence_interval(&self, p: f64) -> Result<ConfidenceInterval> {
        ConfidenceRegionSolver::new(self.solver_config()).bilateral(self, p)
    }

    fn unilateral_confidence_interval(
        &self,
        p: f64,
        upper_tail: bool,
    ) -> Result<ConfidenceInterval> {
        ConfidenceRegionSolver::new(self.solver_config()).unilateral(self, p, upper_tail)
    }

    fn minimum_volume_interval(&self, p: f64) -> Result<MinimumVolumeInterval> {
        ConfidenceRegionSolver::new(self.solver_config()).minimum_volume_interval(self, p)
    }

    fn minimum_volume_level_set(&self, p: f64) -> Result<LevelSet> {
        ConfidenceRegionSolver::new(self.solver_config()).minimum_volume_level_set(self, p)
    }
}

impl<D: Distribution + ?Sized> ConfidenceRegions for D {}

//! Continuous probability distributions with analytic quantities
//!
//! This crate re-exports the `dist-*` workspace:
//!
//! - the [`Distribution`] contract, the numeric [`kernel`], errors and
//!   solver configuration from `dist-core`
//! - [`univariate`]: concrete families, currently [`SmoothedUniform`]
//! - [`confidence`]: bilateral, unilateral and minimum-volume regions over
//!   any distribution
//!
//! # Example
//!
//! ```rust
//! use dist_stats::prelude::*;
//!
//! let dist = SmoothedUniform::new(-0.5, 1.5, 0.5)?;
//! assert!((dist.mean() - 0.5).abs() < 1e-15);
//!
//! let ci = dist.bilateral_confidence_interval(0.95)?;
//! assert!((ci.beta - 0.95).abs() < 1e-6);
//! # Ok::<(), dist_stats::Error>(())
//! ```

pub use dist_confidence as confidence;
pub use dist_univariate as univariate;

pub use dist_confidence::{
    bilateral_confidence_interval, minimum_volume_interval, minimum_volume_level_set,
    unilateral_confidence_interval, ConfidenceInterval, ConfidenceRegionSolver,
    ConfidenceRegions, LevelSet, MinimumVolumeInterval,
};
pub use dist_core::kernel;
pub use dist_core::{
    Complex64, Distribution, Error, Interval, Point, RegionKind, Result, Sample, SolverConfig,
};
pub use dist_univariate::SmoothedUniform;

pub mod prelude {
    pub use crate::{
        ConfidenceInterval, ConfidenceRegionSolver, ConfidenceRegions, Distribution, Error,
        Interval, LevelSet, MinimumVolumeInterval, Point, Result, Sample, SmoothedUniform,
        SolverConfig,
    };
}

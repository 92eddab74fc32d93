//! Result types for confidence-region queries

use dist_core::Interval;
use std::fmt;

/// An interval together with the probability it actually covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// The region
    pub interval: Interval,
    /// Achieved probability mass, which may differ from the request by the
    /// solver tolerance
    pub beta: f64,
}

impl ConfidenceInterval {
    pub fn new(interval: Interval, beta: f64) -> Self {
        Self { interval, beta }
    }

    pub fn lower(&self) -> f64 {
        self.interval.lower()
    }

    pub fn upper(&self) -> f64 {
        self.interval.upper()
    }

    pub fn width(&self) -> f64 {
        self.interval.width()
    }

    pub fn contains(&self, x: f64) -> bool {
        self.interval.contains(x)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, beta = {:.6}", self.interval, self.beta)
    }
}

/// Shortest interval of a given mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumVolumeInterval {
    pub interval: Interval,
    /// Density level at the interval boundary
    pub threshold: f64,
    /// Achieved probability mass
    pub beta: f64,
}

impl fmt::Display for MinimumVolumeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, threshold = {:.6}, beta = {:.6}",
            self.interval, self.threshold, self.beta
        )
    }
}

/// The region `{x : pdf(x) >= threshold}` of a unimodal density
///
/// For a unimodal density the region is a single interval, stored
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSet {
    pub interval: Interval,
    pub threshold: f64,
    /// Achieved probability mass of the region
    pub beta: f64,
}

impl LevelSet {
    pub fn contains(&self, x: f64) -> bool {
        self.interval.contains(x)
    }

    /// Lebesgue measure of the region
    pub fn volume(&self) -> f64 {
        self.interval.width()
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{x : pdf(x) >= {:.6}}} = {}, beta = {:.6}",
            self.threshold, self.interval, self.beta
        )
    }
}

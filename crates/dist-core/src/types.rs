//! Points, samples and intervals

use crate::{Distribution, Error, Result};
use std::fmt;
use std::ops::Deref;

/// A fixed-length ordered sequence of coordinates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point(Vec<f64>);

impl Point {
    /// Create a point of `dimension` coordinates all equal to `value`
    pub fn new(dimension: usize, value: f64) -> Self {
        Self(vec![value; dimension])
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Point {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Point {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<f64> for Point {
    fn from(value: f64) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// An ordered collection of points sharing one dimension
///
/// Stored row-major; every row has exactly `dimension` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    dimension: usize,
    data: Vec<f64>,
}

impl Sample {
    /// Create an empty sample
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    pub fn with_capacity(dimension: usize, size: usize) -> Self {
        Self {
            dimension,
            data: Vec::with_capacity(dimension * size),
        }
    }

    /// Append a point, rejecting it if its length differs from the dimension
    pub fn push(&mut self, point: &[f64]) -> Result<()> {
        if point.len() != self.dimension {
            return Err(Error::Domain(format!(
                "point of dimension {} pushed into a sample of dimension {}",
                point.len(),
                self.dimension
            )));
        }
        self.data.extend_from_slice(point);
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.data.len() / self.dimension
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dimension)?;
        self.data.get(start..start + self.dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dimension.max(1))
    }

    /// Copy out one coordinate of every point
    pub fn marginal(&self, component: usize) -> Result<Vec<f64>> {
        if component >= self.dimension {
            return Err(Error::Domain(format!(
                "component {component} out of range for dimension {}",
                self.dimension
            )));
        }
        Ok(self.iter().map(|row| row[component]).collect())
    }

    /// Componentwise empirical mean
    pub fn compute_mean(&self) -> Result<Point> {
        if self.is_empty() {
            return Err(Error::Domain("mean of an empty sample".to_string()));
        }
        let n = self.len() as f64;
        let mut mean = vec![0.0; self.dimension];
        for row in self.iter() {
            for (m, x) in mean.iter_mut().zip(row) {
                *m += x;
            }
        }
        mean.iter_mut().for_each(|m| *m /= n);
        Ok(Point(mean))
    }

    /// Unbiased empirical covariance, row-major `dimension x dimension`
    pub fn compute_covariance(&self) -> Result<Vec<f64>> {
        let n = self.len();
        if n < 2 {
            return Err(Error::Domain(format!(
                "covariance needs at least 2 points, got {n}"
            )));
        }
        let mean = self.compute_mean()?;
        let d = self.dimension;
        let mut cov = vec![0.0; d * d];
        for row in self.iter() {
            for i in 0..d {
                let di = row[i] - mean[i];
                for j in 0..=i {
                    cov[i * d + j] += di * (row[j] - mean[j]);
                }
            }
        }
        let scale = 1.0 / (n - 1) as f64;
        for i in 0..d {
            for j in 0..=i {
                cov[i * d + j] *= scale;
                cov[j * d + i] = cov[i * d + j];
            }
        }
        Ok(cov)
    }
}

impl From<Vec<f64>> for Sample {
    /// Univariate sample, one point per value
    fn from(values: Vec<f64>) -> Self {
        Self {
            dimension: 1,
            data: values,
        }
    }
}

/// Closed interval `[lower, upper]` on the real line
///
/// Either bound may be infinite, which is how unilateral intervals are
/// represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() {
            return Err(Error::Domain("interval bounds must not be NaN".to_string()));
        }
        if lower > upper {
            return Err(Error::Domain(format!(
                "interval lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Finite interval between two bounds, each clamped into the `f64` range
    ///
    /// Bounds are ordered; a NaN bound saturates to the matching end of the
    /// range.
    pub fn saturating(lower: f64, upper: f64) -> Self {
        let lower = lower.max(f64::MIN);
        let upper = upper.min(f64::MAX);
        if lower > upper {
            Self {
                lower: upper,
                upper: lower,
            }
        } else {
            Self { lower, upper }
        }
    }

    /// The whole real line
    pub fn real_line() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Probability mass `dist` assigns to the interval
    ///
    /// Each finite bound contributes its own tail, so both tails keep full
    /// precision.
    pub fn probability<D: Distribution + ?Sized>(&self, dist: &D) -> f64 {
        let lower_tail = if self.lower == f64::NEG_INFINITY {
            0.0
        } else {
            dist.cdf(self.lower)
        };
        let upper_tail = if self.upper == f64::INFINITY {
            0.0
        } else {
            dist.complementary_cdf(self.upper)
        };
        (1.0 - lower_tail - upper_tail).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

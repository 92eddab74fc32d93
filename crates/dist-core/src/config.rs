//! Solver configuration shared by every numerically inverted operation

use crate::{Error, Result};

/// Policy for the bracketing root-finder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the abscissa
    pub tolerance: f64,
    /// Maximum number of bisection steps
    pub max_iterations: usize,
    /// Maximum number of outward bracket expansions
    pub max_expansions: usize,
    /// Safety margin, in scale units, around a distribution's core support
    pub bracket_width: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
            max_expansions: 64,
            bracket_width: 10.0,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_bracket_width(mut self, bracket_width: f64) -> Self {
        self.bracket_width = bracket_width;
        self
    }

    /// Reject configurations the solver cannot honor
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::Domain(format!(
                "solver tolerance {} must be positive and finite",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::Domain(
                "solver iteration cap must be non-zero".to_string(),
            ));
        }
        if !(self.bracket_width > 0.0 && self.bracket_width.is_finite()) {
            return Err(Error::Domain(format!(
                "bracket width {} must be positive and finite",
                self.bracket_width
            )));
        }
        Ok(())
    }
}

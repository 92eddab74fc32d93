//! Univariate continuous distributions
//!
//! Concrete implementations of the [`dist_core::Distribution`] contract.
//! Every family here evaluates its density, distribution function and
//! parameter gradients in closed form and falls back to the core numeric
//! kernel only for inversions.
//!
//! # Example
//!
//! ```rust
//! use dist_core::Distribution;
//! use dist_univariate::SmoothedUniform;
//!
//! let dist = SmoothedUniform::new(-0.5, 1.5, 0.5).unwrap();
//! let gradient = dist.pdf_gradient(1.0).unwrap();
//! assert_eq!(gradient.len(), dist.parameters().len());
//! ```

mod smoothed_uniform;

pub use smoothed_uniform::SmoothedUniform;

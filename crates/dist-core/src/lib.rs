//! Core traits and types for continuous distribution modeling
//!
//! This crate provides the pieces every distribution in the workspace is
//! built from:
//!
//! - **Numeric kernel** ([`kernel`]): standard normal primitives, a monotone
//!   bracketing root-finder and a golden-section maximizer
//! - **Distribution contract** ([`Distribution`]): density, cumulative,
//!   quantile, moment, gradient and sampling operations
//! - **Data types**: [`Point`], [`Sample`] and [`Interval`]
//! - **Errors and configuration**: [`Error`] and [`SolverConfig`]
//!
//! # Example
//!
//! ```rust
//! use dist_core::{kernel, SolverConfig};
//!
//! let config = SolverConfig::default();
//! let z = kernel::bisect(kernel::normal_cdf, -10.0, 10.0, 0.975, &config).unwrap();
//! assert!((z - 1.959964).abs() < 1e-6);
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod traits;
pub mod types;

pub use config::SolverConfig;
pub use error::{Error, RegionKind, Result};
pub use traits::Distribution;
pub use types::{Interval, Point, Sample};

// Re-exported so implementers do not need their own num-complex dependency
pub use num_complex::Complex64;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

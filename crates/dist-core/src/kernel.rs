//! Scalar numeric kernel shared by every distribution
//!
//! Standard normal primitives built on `statrs`' complementary error function,
//! a monotone bracketing root-finder, a golden-section maximizer, and the
//! central-difference helper used by validation code.

use crate::{Error, Result, SolverConfig};
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use tracing::debug;

/// Beyond this many standard deviations the normal law is saturated
pub const NORMAL_SATURATION: f64 = 40.0;

/// Standard normal density
pub fn normal_pdf(x: f64) -> f64 {
    if x.abs() > NORMAL_SATURATION {
        return 0.0;
    }
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function
///
/// Evaluated through `erfc` on both sides so the lower tail keeps full
/// relative precision.
pub fn normal_cdf(x: f64) -> f64 {
    if x < -NORMAL_SATURATION {
        return 0.0;
    }
    if x > NORMAL_SATURATION {
        return 1.0;
    }
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal upper-tail probability `1 - Phi(x)`, computed directly
pub fn normal_ccdf(x: f64) -> f64 {
    normal_cdf(-x)
}

/// Antiderivative of the normal CDF: `G(z) = z Phi(z) + phi(z)`
///
/// `G` vanishes at `-inf` and behaves like `z` at `+inf`; it is the
/// building block of every smoothed-uniform cumulative formula.
pub fn normal_partial_expectation(z: f64) -> f64 {
    if z < -NORMAL_SATURATION {
        return 0.0;
    }
    if z > NORMAL_SATURATION {
        return z;
    }
    z * normal_cdf(z) + normal_pdf(z)
}

/// Central difference `(f(x + h) - f(x - h)) / 2h`
///
/// Validation helper; closed-form derivatives never call it.
pub fn central_difference<F>(f: F, x: f64, h: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if !(h > 0.0 && h.is_finite()) {
        return Err(Error::Domain(format!("step {h} must be positive and finite")));
    }
    if !x.is_finite() {
        return Err(Error::non_finite("differentiation point"));
    }
    Ok((f(x + h) - f(x - h)) / (2.0 * h))
}

/// Solve `f(x) = target` for a monotone `f`
///
/// See [`try_bisect`] for the bracketing policy.
pub fn bisect<F>(f: F, lo: f64, hi: f64, target: f64, config: &SolverConfig) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    try_bisect(|x| Ok(f(x)), lo, hi, target, config)
}

/// Solve `f(x) = target` for a monotone, fallible `f`
///
/// `f` may be increasing or decreasing on `[lo, hi]`. When the target is not
/// bracketed, the bound on the target's side moves outward by a doubling step,
/// at most `config.max_expansions` times. Bisection then runs until the
/// bracket is narrower than `config.tolerance`, the midpoint is no longer
/// representable, or `f` hits the target exactly.
pub fn try_bisect<F>(
    mut f: F,
    lo: f64,
    hi: f64,
    target: f64,
    config: &SolverConfig,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    config.validate()?;
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(Error::non_finite("bisection bracket"));
    }
    if lo > hi {
        return Err(Error::Domain(format!("empty bisection bracket [{lo}, {hi}]")));
    }
    if !target.is_finite() {
        return Err(Error::non_finite("bisection target"));
    }

    let mut eval = |x: f64| -> Result<f64> {
        let g = f(x)? - target;
        if g.is_nan() {
            return Err(Error::Domain(format!("objective is NaN at {x}")));
        }
        Ok(g)
    };

    let (mut lo, mut hi) = (lo, hi);
    let mut g_lo = eval(lo)?;
    if g_lo == 0.0 {
        return Ok(lo);
    }
    let mut g_hi = eval(hi)?;
    if g_hi == 0.0 {
        return Ok(hi);
    }

    let increasing = g_hi >= g_lo;
    let mut step = if hi > lo { hi - lo } else { 1.0 };
    let mut expansions = 0;
    while g_lo.signum() == g_hi.signum() {
        if expansions == config.max_expansions {
            return Err(Error::Convergence {
                iterations: 0,
                message: format!(
                    "no sign change for target {target} in [{lo}, {hi}] after {expansions} bracket expansions"
                ),
            });
        }
        let target_below = if increasing { g_lo > 0.0 } else { g_lo < 0.0 };
        let next = if target_below { lo - step } else { hi + step };
        if !next.is_finite() {
            return Err(Error::Convergence {
                iterations: 0,
                message: format!("bracket for target {target} diverged past [{lo}, {hi}]"),
            });
        }
        if target_below {
            hi = lo;
            g_hi = g_lo;
            lo = next;
            g_lo = eval(lo)?;
            if g_lo == 0.0 {
                return Ok(lo);
            }
        } else {
            lo = hi;
            g_lo = g_hi;
            hi = next;
            g_hi = eval(hi)?;
            if g_hi == 0.0 {
                return Ok(hi);
            }
        }
        step *= 2.0;
        expansions += 1;
    }
    if expansions > 0 {
        debug!("Bisection bracket expanded {} times to [{}, {}]", expansions, lo, hi);
    }

    for iteration in 0..config.max_iterations {
        // Halve each bound first so brackets near f64::MAX do not overflow
        let mid = 0.5 * lo + 0.5 * hi;
        if hi - lo <= config.tolerance || mid <= lo || mid >= hi {
            debug!("Bisection converged after {} iterations at {}", iteration, mid);
            return Ok(mid);
        }
        let g_mid = eval(mid)?;
        if g_mid == 0.0 {
            return Ok(mid);
        }
        if g_mid.signum() == g_lo.signum() {
            lo = mid;
            g_lo = g_mid;
        } else {
            hi = mid;
        }
    }

    if hi - lo <= config.tolerance {
        return Ok(lo + 0.5 * (hi - lo));
    }
    Err(Error::Convergence {
        iterations: config.max_iterations,
        message: format!(
            "bracket [{lo}, {hi}] still wider than tolerance {}",
            config.tolerance
        ),
    })
}

/// Locate the maximizer of a unimodal `f` on `[lo, hi]` by golden-section search
pub fn golden_section_max<F>(f: F, lo: f64, hi: f64, config: &SolverConfig) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return Err(Error::Domain(format!("invalid search interval [{lo}, {hi}]")));
    }

    let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
    let (mut a, mut b) = (lo, hi);
    let mut c = b - inv_phi * (b - a);
    let mut d = a + inv_phi * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..config.max_iterations {
        if b - a <= config.tolerance {
            return Ok(0.5 * (a + b));
        }
        if fc >= fd {
            b = d;
            d = c;
            fd = fc;
            c = b - inv_phi * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + inv_phi * (b - a);
            fd = f(d);
        }
    }

    if b - a <= config.tolerance {
        return Ok(0.5 * (a + b));
    }
    Err(Error::Convergence {
        iterations: config.max_iterations,
        message: format!("golden-section bracket [{a}, {b}] did not shrink below tolerance"),
    })
}

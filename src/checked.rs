//! Validating wrappers over the fast evaluators
//!
//! The evaluators in [`hypergeometric`] and [`legendre`] trust their callers
//! and surface bad parameters as non-finite arithmetic, the cheapest thing a
//! tight series loop can do. These wrappers sit at the boundary instead:
//! they validate first and report a distinguished [`Error`] kind, so a
//! caller holding untrusted parameters never has to fish a NaN out of a
//! result.
//!
//! [`hypergeometric`]: crate::hypergeometric
//! [`legendre`]: crate::legendre
//! [`Error`]: crate::error::Error

use crate::error::{Error, Result};
use crate::gamma::Gamma;
use crate::real::Real;
use crate::series::Evaluation;
use crate::{hypergeometric, legendre};
use num_traits::{One, Zero};

/// ₂F₁ with divergence and pole checks
///
/// Rejects |x| >= 1 with [`Error::Divergent`] and a non-positive integer c
/// with [`Error::Pole`]. The series evaluator itself cannot represent the
/// polynomial cases that mathematically terminate before such a pole, so
/// those are rejected too.
pub fn hyp2f1<R: Real>(a: &R, b: &R, c: &R, x: &R) -> Result<Evaluation<R>> {
    if x.clone().abs() >= R::one() {
        return Err(Error::divergent("hyp2f1"));
    }
    let zero = R::zero();
    if *c <= zero && c.is_integer() {
        return Err(Error::pole("hyp2f1", "c"));
    }
    Ok(hypergeometric::hyp2f1_eval(a, b, c, x))
}

/// P_v^u with the open-interval domain check
pub fn legendre_p<R: Gamma>(v: &R, u: &R, x: &R) -> Result<R> {
    check_unit_interval("legendre_p", x)?;
    legendre::legendre_p(v, u, x)
}

/// Q_v^u with the open-interval domain check
///
/// Near-integer orders are still rejected by the underlying evaluator with
/// [`Error::NearIntegerOrder`].
pub fn legendre_q<R: Gamma>(v: &R, u: &R, x: &R) -> Result<R> {
    check_unit_interval("legendre_q", x)?;
    legendre::legendre_q(v, u, x)
}

fn check_unit_interval<R: Real>(func: &'static str, x: &R) -> Result<()> {
    if x.clone().abs() >= R::one() {
        return Err(Error::domain(func, format!("x = {} is outside (-1, 1)", x)));
    }
    Ok(())
}

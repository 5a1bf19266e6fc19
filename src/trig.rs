//! Sine and cosine by Taylor series with two-stage argument reduction
//!
//! The argument is first folded into a quadrant of the circle, then shrunk by
//! repeated division by 3 until it is at most one tenth. At that size the
//! alternating Taylor series gains better than one decimal digit per term, so
//! the term count stays small no matter how large the argument or how high
//! the working precision. Triple-angle identities undo the shrinking, and a
//! quadrant table restores the sign.
//!
//! # References
//! - Abramowitz & Stegun 4.3.27 (triple-angle identities)
//! - DLMF 4.21: Identities involving trigonometric functions

use crate::real::Real;
use crate::series::{trig_series_budget, Evaluation};
use num_traits::{One, Zero};

/// Outcome of the two-stage argument reduction
///
/// Satisfies `x = (4m + quadrant)(pi/2) + remainder * 3^triplings` for some
/// integer m >= 0, with `0 <= remainder <= 1/10`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<R> {
    /// Quadrant index: floor(x / (pi/2)) mod 4
    pub quadrant: u8,
    /// Doubly reduced remainder, at most one tenth
    pub remainder: R,
    /// How many times the quadrant remainder was divided by 3
    pub triplings: u32,
}

/// Reduce a non-negative argument for the series kernels
///
/// Computes k = floor(x / (pi/2)) and folds x into its quadrant remainder,
/// then divides the remainder by 3 until it is at most one tenth, counting
/// the divisions. The quadrant index is k mod 4.
///
/// The fold is exact to working precision for arguments whose unit in the
/// last place is below 1; far beyond that, the subtraction x - k*(pi/2)
/// loses accuracy as any one-shot reduction does.
pub fn reduce<R: Real>(x: &R) -> Reduction<R> {
    let half_pi = R::half_pi();

    let k = (x.clone() / &half_pi).floor();
    let quadrant_value = k.clone() - (k.clone() / 4u32).floor() * 4u32;
    let quadrant = quadrant_value.to_u32().unwrap_or(0) as u8;

    let mut remainder = x.clone() - half_pi * &k;

    let one_tenth = R::from_ratio(1, 10);
    let mut triplings = 0u32;
    while remainder > one_tenth {
        remainder /= 3u32;
        triplings += 1;
    }

    Reduction {
        quadrant,
        remainder,
        triplings,
    }
}

/// Taylor series for sin on a doubly reduced argument
///
/// term_k = term_{k-2} * r^2 / (k (k-1)), signs alternating, stopping once a
/// term falls below epsilon * r.
fn sin_series<R: Real>(r: &R) -> Evaluation<R> {
    let budget = trig_series_budget(R::digits10());

    let r2 = r.clone() * r;
    let mut term = r.clone();
    let mut sum = r.clone();
    let mut term_is_neg = true;
    let tol = R::epsilon() * r;

    let mut converged = false;
    let mut terms = 1u32;

    for k in (3..budget).step_by(2) {
        term *= &r2;
        term /= k;
        term /= k - 1;

        if term < tol {
            converged = true;
            break;
        }

        if term_is_neg {
            sum -= &term;
        } else {
            sum += &term;
        }
        term_is_neg = !term_is_neg;
        terms = k;
    }

    Evaluation {
        value: sum,
        converged,
        terms,
    }
}

/// Taylor series for cos on a doubly reduced argument
///
/// Accumulates 1 - cos r and returns the complement, so the sum keeps full
/// relative accuracy for small r.
fn cos_series<R: Real>(r: &R) -> Evaluation<R> {
    let budget = trig_series_budget(R::digits10());

    let r2 = r.clone() * r;
    let mut term = r2.clone() / 2u32;
    let mut sum = term.clone();
    let mut term_is_neg = true;
    let tol = R::epsilon() * r;

    let mut converged = false;
    let mut terms = 2u32;

    for k in (4..budget).step_by(2) {
        term *= &r2;
        term /= k;
        term /= k - 1;

        if term < tol {
            converged = true;
            break;
        }

        if term_is_neg {
            sum -= &term;
        } else {
            sum += &term;
        }
        term_is_neg = !term_is_neg;
        terms = k;
    }

    Evaluation {
        value: R::one() - sum,
        converged,
        terms,
    }
}

/// Apply sin(3t) = 3 sin t - 4 sin^3 t the given number of times
fn rescale_sin<R: Real>(mut s: R, triplings: u32) -> R {
    for _ in 0..triplings {
        s = s.clone() * 3u32 - s.powi(3) * 4u32;
    }
    s
}

/// Apply cos(3t) = 4 cos^3 t - 3 cos t the given number of times
fn rescale_cos<R: Real>(mut c: R, triplings: u32) -> R {
    for _ in 0..triplings {
        c = c.clone().powi(3) * 4u32 - c * 3u32;
    }
    c
}

/// Sine over the full real line
///
/// Negative arguments fold through the odd symmetry sin(-x) = -sin(x);
/// sin(0) is exactly 0. Positive arguments are reduced, summed with the
/// kernel the quadrant calls for, rescaled, and signed:
///
/// ```text
/// | n |  sin(x) |  cos(x) |
/// |---|---------|---------|
/// | 0 |  sin(r) |  cos(r) |
/// | 1 |  cos(r) | -sin(r) |
/// | 2 | -sin(r) | -cos(r) |
/// | 3 | -cos(r) |  sin(r) |
/// ```
pub fn sin<R: Real>(x: &R) -> R {
    sin_eval(x).value
}

/// Cosine over the full real line
///
/// Even symmetry folds negative arguments; cos(0) is exactly 1. See [`sin`]
/// for the quadrant table.
pub fn cos<R: Real>(x: &R) -> R {
    cos_eval(x).value
}

/// Sine with convergence diagnostics
///
/// Same value as [`sin`], plus the kernel's term count and whether its
/// tolerance test fired before the term budget ran out.
pub fn sin_eval<R: Real>(x: &R) -> Evaluation<R> {
    if x.is_zero() {
        return Evaluation {
            value: R::zero(),
            converged: true,
            terms: 0,
        };
    }

    let odd_fold = *x < R::zero();
    let magnitude = if odd_fold { -x.clone() } else { x.clone() };

    let reduction = reduce(&magnitude);
    let wants_cos = reduction.quadrant == 1 || reduction.quadrant == 3;
    let quadrant_neg = reduction.quadrant > 1;

    let Evaluation {
        value,
        converged,
        terms,
    } = if wants_cos {
        cos_series(&reduction.remainder)
    } else {
        sin_series(&reduction.remainder)
    };

    let rescaled = if wants_cos {
        rescale_cos(value, reduction.triplings)
    } else {
        rescale_sin(value, reduction.triplings)
    };

    let mut value = rescaled.abs();
    if quadrant_neg != odd_fold {
        value = -value;
    }

    Evaluation {
        value,
        converged,
        terms,
    }
}

/// Cosine with convergence diagnostics
pub fn cos_eval<R: Real>(x: &R) -> Evaluation<R> {
    if x.is_zero() {
        return Evaluation {
            value: R::one(),
            converged: true,
            terms: 0,
        };
    }

    let magnitude = x.clone().abs();

    let reduction = reduce(&magnitude);
    let wants_sin = reduction.quadrant == 1 || reduction.quadrant == 3;
    let quadrant_neg = reduction.quadrant == 1 || reduction.quadrant == 2;

    let Evaluation {
        value,
        converged,
        terms,
    } = if wants_sin {
        sin_series(&reduction.remainder)
    } else {
        cos_series(&reduction.remainder)
    };

    let rescaled = if wants_sin {
        rescale_sin(value, reduction.triplings)
    } else {
        rescale_cos(value, reduction.triplings)
    };

    let mut value = rescaled.abs();
    if quadrant_neg {
        value = -value;
    }

    Evaluation {
        value,
        converged,
        terms,
    }
}

//! Gauss hypergeometric function ₂F₁ at arbitrary precision
//!
//! ```text
//! ₂F₁(a, b; c; x) = Σ_{n=0}^∞ (a)_n (b)_n / ((c)_n n!) x^n
//! ```
//!
//! Summed directly from the series definition with running recurrences: one
//! running power x^n/n! and one running rising factorial per parameter, each
//! advanced by a single multiply per term. No transformation or analytic
//! continuation is applied, so the caller owns the convergence region.
//!
//! # References
//! - Abramowitz & Stegun 15.1.1
//! - DLMF 15.2.1: Gauss hypergeometric series

use crate::error::Result;
use crate::gamma::Gamma;
use crate::real::Real;
use crate::series::{hyp2f1_series_budget, Evaluation};
use num_traits::One;

/// ₂F₁(a, b; c; x) by direct series summation
///
/// # Properties
/// - Converges for |x| < 1
/// - ₂F₁(a, b; c; 0) = 1
/// - Symmetric in a and b
/// - Terminates to a polynomial when a or b is a non-positive integer
///
/// No input validation is performed: a non-positive integer c makes a
/// running denominator vanish and the sum comes back non-finite, and |x|
/// outside the unit interval runs the term budget out. The [`checked`]
/// module wraps this entry point with the corresponding error reporting.
///
/// [`checked`]: crate::checked
pub fn hyp2f1<R: Real>(a: &R, b: &R, c: &R, x: &R) -> R {
    hyp2f1_eval(a, b, c, x).value
}

/// ₂F₁ with convergence diagnostics
///
/// The series may stop only after term 11, and then only once a term's
/// magnitude drops below epsilon * |x|; partial sums of the tail bracket the
/// true value, so the first omitted term bounds the truncation error. If the
/// term budget runs out first, the partial sum is returned with `converged`
/// cleared.
pub fn hyp2f1_eval<R: Real>(a: &R, b: &R, c: &R, x: &R) -> Evaluation<R> {
    let budget = hyp2f1_series_budget(R::digits10());

    let mut x_pow_n_div_n_fact = x.clone();
    let mut poch_a = a.clone();
    let mut poch_b = b.clone();
    let mut poch_c = c.clone();
    let mut ap = a.clone();
    let mut bp = b.clone();
    let mut cp = c.clone();

    // Terms n = 0 and n = 1 folded together.
    let mut sum = R::one() + (poch_a.clone() * &poch_b / &poch_c) * &x_pow_n_div_n_fact;

    let tol = R::epsilon() * x.clone().abs();

    let mut converged = false;
    let mut terms = 1u32;

    for n in 2..budget {
        x_pow_n_div_n_fact *= x;
        x_pow_n_div_n_fact /= n;

        ap += 1u32;
        bp += 1u32;
        cp += 1u32;
        poch_a *= &ap;
        poch_b *= &bp;
        poch_c *= &cp;

        let term = (poch_a.clone() * &poch_b / &poch_c) * &x_pow_n_div_n_fact;

        if n > 11 && term.clone().abs() < tol {
            converged = true;
            break;
        }

        sum += &term;
        terms = n;
    }

    Evaluation {
        value: sum,
        converged,
        terms,
    }
}

/// Regularized Gauss hypergeometric function ₂F₁(a, b; c; x) / Γ(c)
///
/// Division by Γ(c) removes the poles at non-positive integer c, which is
/// what the Legendre evaluators rely on when 1 - u is a non-positive
/// integer. Errors from the gamma service propagate unchanged.
pub fn hyp2f1_regularized<R: Gamma>(a: &R, b: &R, c: &R, x: &R) -> Result<R> {
    Ok(hyp2f1(a, b, c, x) / c.tgamma()?)
}

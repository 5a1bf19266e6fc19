//! Legendre functions of general real degree and order
//!
//! P and Q on the real axis inside the unit circle, through their Gauss
//! hypergeometric representations. Both reduce to one or two regularized
//! ₂F₁ evaluations at argument (1-x)/2 plus algebraic prefactors, so the
//! heavy lifting happens in [`hypergeometric`] and the gamma service.
//!
//! # References
//! - DLMF 14.3.1: P via the regularized hypergeometric series
//! - <https://functions.wolfram.com/HypergeometricFunctions/LegendreP2General/06/01/04/>
//! - <https://functions.wolfram.com/HypergeometricFunctions/LegendreQ2General/06/01/02/>
//!
//! [`hypergeometric`]: crate::hypergeometric

use crate::error::{Error, Result};
use crate::gamma::{pochhammer, Gamma};
use crate::hypergeometric::hyp2f1_regularized;
use crate::real::Real;
use crate::trig;
use num_traits::One;

/// Legendre function of the first kind P_v^u(x), -1 < x < 1
///
/// ```text
/// P_v^u(x) = (1+x)^(u/2) / (1-x)^(u/2) * ₂F₁-reg(-v, 1+v; 1-u; (1-x)/2)
/// ```
///
/// The regularized series absorbs the pole of Γ(1-u) at positive integer u.
/// The argument is not validated; outside the open interval the power
/// prefactors go non-finite. Gamma-service errors propagate unchanged.
pub fn legendre_p<R: Gamma>(v: &R, u: &R, x: &R) -> Result<R> {
    let u_half = u.clone() / 2u32;
    let one_minus_x = R::one() - x;
    let one_plus_x = R::one() + x;
    let one_minus_u = R::one() - u;

    let h2f1_reg = hyp2f1_regularized(
        &(-v.clone()),
        &(v.clone() + 1u32),
        &one_minus_u,
        &(one_minus_x.clone() / 2u32),
    )?;

    Ok((one_plus_x.powf(&u_half) * h2f1_reg) / one_minus_x.powf(&u_half))
}

/// Legendre function of the second kind Q_v^u(x), -1 < x < 1
///
/// With R = ((1+x)/(1-x))^(u/2) and h1, h2 the regularized series at
/// parameters (1-u) and (1+u):
///
/// ```text
/// Q_v^u(x) = (pi/2) * [h1 * R * cos(u pi) - h2 * (v+1-u)_{2u} / R] / sin(u pi)
/// ```
///
/// The formula divides by sin(u pi), which vanishes at integer u where Q
/// has a removable-singularity form this representation cannot take. Orders
/// within 10^(1 - digits10/2) of an integer are rejected with
/// [`Error::NearIntegerOrder`] before any evaluation happens; anything
/// closer would spend more than half the working digits amplifying the
/// series error through the near-zero denominator.
pub fn legendre_q<R: Gamma>(v: &R, u: &R, x: &R) -> Result<R> {
    let fractional = u.clone() - u.clone().floor();
    let threshold = near_integer_threshold::<R>();
    if fractional < threshold || fractional > R::one() - &threshold {
        return Err(Error::near_integer_order("legendre_q"));
    }

    let u_pi = u.clone() * R::pi();
    let sin_u_pi = trig::sin(&u_pi);
    let cos_u_pi = trig::cos(&u_pi);

    let one_minus_x = R::one() - x;
    let one_plus_x = R::one() + x;
    let u_half = u.clone() / 2u32;
    let one_minus_x_over_two = one_minus_x.clone() / 2u32;

    let ratio_pow = (one_plus_x / &one_minus_x).powf(&u_half);

    let v_plus_one = v.clone() + 1u32;
    let minus_v = -v.clone();

    let h1 = hyp2f1_regularized(&minus_v, &v_plus_one, &(R::one() - u), &one_minus_x_over_two)?;
    let h2 = hyp2f1_regularized(&minus_v, &v_plus_one, &(R::one() + u), &one_minus_x_over_two)?;

    let poch = pochhammer(&(v_plus_one - u), &(u.clone() * 2u32))?;

    let term1 = (h1 * &ratio_pow) * &cos_u_pi;
    let term2 = (h2 / &ratio_pow) * &poch;

    Ok((R::half_pi() * (term1 - term2)) / sin_u_pi)
}

/// Smallest distance from an integer order that `legendre_q` accepts
fn near_integer_threshold<R: Real>() -> R {
    R::from_u32(10).powi(1 - (R::digits10() / 2) as i32)
}

//! Gamma-function service seam and the Pochhammer symbol

use crate::error::Result;
use crate::real::Real;

/// Gamma-function service used by the regularized hypergeometric and
/// Legendre evaluators
///
/// Implementations must report the poles at non-positive integers as
/// [`Error::Domain`] and a result outside the representable range as
/// [`Error::Overflow`] instead of handing back non-finite values.
///
/// [`Error::Domain`]: crate::error::Error::Domain
/// [`Error::Overflow`]: crate::error::Error::Overflow
pub trait Gamma: Real {
    /// The gamma function Γ(self)
    fn tgamma(&self) -> Result<Self>;
}

/// Pochhammer symbol (rising factorial) for real displacement
///
/// ```text
/// (x)_a = Γ(x + a) / Γ(x)
/// ```
///
/// No special-casing of integer or pole arguments: whatever the gamma
/// service reports for either evaluation propagates unchanged.
pub fn pochhammer<R: Gamma>(x: &R, a: &R) -> Result<R> {
    Ok((x.clone() + a).tgamma()? / x.tgamma()?)
}

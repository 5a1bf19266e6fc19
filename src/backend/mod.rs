//! Number backends implementing [`Real`]
//!
//! One backend ships: [`Dec`], a const-generic decimal-precision wrapper
//! over MPFR via the `rug` crate. The evaluators never name it directly;
//! they only see the [`Real`] and [`Gamma`] seams, so an alternative
//! backend only has to implement those two traits.
//!
//! [`Real`]: crate::real::Real
//! [`Gamma`]: crate::gamma::Gamma

mod mpfr;

pub use mpfr::Dec;

//! # specfun
//!
//! **Special functions at arbitrary decimal precision.**
//!
//! specfun evaluates elementary and hypergeometric-family special functions
//! to a precision you pick at the type level - from a few dozen digits up to
//! a thousand and beyond - on an MPFR-backed decimal scalar.
//!
//! ## Why specfun?
//!
//! - **Precision in the type**: `Dec<1001>` and `Dec<50>` are different types,
//!   so mixed-precision bugs cannot compile
//! - **Backend-agnostic core**: every evaluator is generic over the [`Real`]
//!   trait, not tied to MPFR
//! - **Honest convergence**: series evaluators report whether they converged
//!   and how many terms they spent, instead of silently truncating
//! - **Validated boundary**: the [`checked`] module rejects out-of-domain
//!   arguments up front, while the fast paths skip re-validation
//!
//! ## Features
//!
//! - **Trigonometry**: sine and cosine by Taylor series with quadrant folding
//!   and divide-by-three angle reduction
//! - **Gauss hypergeometric**: `2F1(a, b; c; x)` and its regularized form
//! - **Gamma family**: gamma via the backend, Pochhammer symbol as a gamma
//!   ratio
//! - **Legendre functions**: `P_v^u(x)` and `Q_v^u(x)` of the first and
//!   second kind for fractional degree and order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specfun::prelude::*;
//!
//! type D = Dec<101>;
//!
//! let x = D::from_ratio(-123, 100);
//! println!("sin(-1.23) = {}", sin(&x));
//!
//! let v = D::from_ratio(1, 3);
//! let u = D::from_ratio(1, 7);
//! let p = legendre_p(&v, &u, &D::from_ratio(789, 1000))?;
//! ```
//!
//! [`Real`]: crate::real::Real

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod checked;
pub mod error;
pub mod gamma;
pub mod hypergeometric;
pub mod legendre;
pub mod real;
pub mod series;
pub mod trig;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::Dec;
    pub use crate::error::{Error, Result};
    pub use crate::gamma::{pochhammer, Gamma};
    pub use crate::hypergeometric::{hyp2f1, hyp2f1_regularized};
    pub use crate::legendre::{legendre_p, legendre_q};
    pub use crate::real::Real;
    pub use crate::series::Evaluation;
    pub use crate::trig::{cos, sin};
}

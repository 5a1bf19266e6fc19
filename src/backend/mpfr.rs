//! MPFR-backed decimal-precision scalar
//!
//! [`Dec<DIGITS>`] carries its working precision in the type. `Dec<50>` and
//! `Dec<1001>` are distinct types, so a computation can never silently mix
//! precisions, and [`Real::digits10`] is a compile-time constant the series
//! budgets key off.
//!
//! # Precision
//!
//! `DIGITS` counts decimal digits. The underlying binary precision is
//! `ceil(DIGITS * log2(10))` bits plus 64 guard bits, so intermediate
//! arithmetic keeps comfortably more resolution than the decimal target
//! and [`Real::epsilon`] (`10^(1 - DIGITS)`) stays meaningful as a
//! convergence tolerance.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{One, Zero};
use rug::float::Constant;
use rug::ops::Pow;
use rug::{Float, Rational};

use crate::error::{Error, Result};
use crate::gamma::Gamma;
use crate::real::Real;

/// Binary precision backing `digits10` decimal digits, plus guard bits.
///
/// Uses a slight over-approximation of `log2(10)` so the ceiling never
/// lands short of the true value.
const fn prec_bits(digits10: u32) -> u32 {
    let scaled = digits10 as u64 * 3_321_929;
    ((scaled + 999_999) / 1_000_000) as u32 + 64
}

/// Arbitrary-precision real number with `DIGITS` decimal digits.
///
/// A thin newtype over [`rug::Float`] pinned to one precision. Every value
/// of a given `Dec<DIGITS>` carries the same binary precision, so results
/// of arithmetic between them stay at that precision as well.
///
/// ```rust,ignore
/// use specfun::prelude::*;
///
/// type D = Dec<100>;
/// let x = D::from_ratio(-123, 100);
/// println!("sin(-1.23) = {}", sin(&x));
/// ```
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Dec<const DIGITS: u32>(Float);

impl<const DIGITS: u32> Dec<DIGITS> {
    /// Binary precision of the underlying [`rug::Float`].
    pub const PRECISION_BITS: u32 = prec_bits(DIGITS);

    /// Borrows the underlying MPFR float.
    #[inline]
    pub fn as_float(&self) -> &Float {
        &self.0
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl<const DIGITS: u32> $trait for Dec<DIGITS> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0.$method(rhs.0))
            }
        }

        impl<'a, const DIGITS: u32> $trait<&'a Dec<DIGITS>> for Dec<DIGITS> {
            type Output = Dec<DIGITS>;

            #[inline]
            fn $method(self, rhs: &'a Dec<DIGITS>) -> Dec<DIGITS> {
                Self(self.0.$method(&rhs.0))
            }
        }

        impl<const DIGITS: u32> $trait<u32> for Dec<DIGITS> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: u32) -> Self {
                Self(self.0.$method(rhs))
            }
        }
    };
}

macro_rules! forward_assign {
    ($trait:ident, $method:ident) => {
        impl<'a, const DIGITS: u32> $trait<&'a Dec<DIGITS>> for Dec<DIGITS> {
            #[inline]
            fn $method(&mut self, rhs: &'a Dec<DIGITS>) {
                self.0.$method(&rhs.0);
            }
        }

        impl<const DIGITS: u32> $trait<u32> for Dec<DIGITS> {
            #[inline]
            fn $method(&mut self, rhs: u32) {
                self.0.$method(rhs);
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_assign!(AddAssign, add_assign);
forward_assign!(SubAssign, sub_assign);
forward_assign!(MulAssign, mul_assign);
forward_assign!(DivAssign, div_assign);

impl<const DIGITS: u32> Neg for Dec<DIGITS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const DIGITS: u32> Zero for Dec<DIGITS> {
    #[inline]
    fn zero() -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, 0u32))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const DIGITS: u32> One for Dec<DIGITS> {
    #[inline]
    fn one() -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, 1u32))
    }
}

impl<const DIGITS: u32> fmt::Display for Dec<DIGITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const DIGITS: u32> Real for Dec<DIGITS> {
    #[inline]
    fn digits10() -> u32 {
        DIGITS
    }

    fn epsilon() -> Self {
        // One unit in the last decimal digit.
        Self(Float::with_val(Self::PRECISION_BITS, 10u32).pow(1 - DIGITS as i32))
    }

    fn pi() -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, Constant::Pi))
    }

    fn half_pi() -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, Constant::Pi) / 2u32)
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, v))
    }

    #[inline]
    fn from_i32(v: i32) -> Self {
        Self(Float::with_val(Self::PRECISION_BITS, v))
    }

    fn from_ratio(numer: i64, denom: i64) -> Self {
        Self(Float::with_val(
            Self::PRECISION_BITS,
            Rational::from((numer, denom)),
        ))
    }

    fn from_decimal(digits: &str) -> Option<Self> {
        Float::parse(digits)
            .ok()
            .map(|parsed| Self(Float::with_val(Self::PRECISION_BITS, parsed)))
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    fn floor(self) -> Self {
        Self(self.0.floor())
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        Self(self.0.pow(n))
    }

    #[inline]
    fn powf(self, exponent: &Self) -> Self {
        Self(self.0.pow(&exponent.0))
    }

    fn to_u32(&self) -> Option<u32> {
        self.0.to_u32_saturating()
    }

    #[inline]
    fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl<const DIGITS: u32> Gamma for Dec<DIGITS> {
    fn tgamma(&self) -> Result<Self> {
        if self.0.is_integer() && (self.0.is_sign_negative() || self.0.is_zero()) {
            return Err(Error::domain(
                "tgamma",
                format!("gamma pole at non-positive integer {}", self.0),
            ));
        }
        let value = self.0.clone().gamma();
        if !value.is_finite() {
            return Err(Error::overflow("tgamma"));
        }
        Ok(Self(value))
    }
}

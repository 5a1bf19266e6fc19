//! Real trait abstracting the arbitrary-precision number type

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for arbitrary-precision real numbers usable by the evaluators
///
/// This is the complete arithmetic contract the series and special-function
/// code relies on. Everything here is cheap relative to a single
/// multiplication at high precision, so the evaluators use it freely.
///
/// # Bounds
/// - `Clone + Debug + Display` - Values move through accumulators by clone
/// - `PartialEq + PartialOrd` - Termination tests compare terms to tolerances
/// - `Zero + One` - Additive/multiplicative identities for accumulator seeds
/// - `Neg` and the four operators, by value and by reference - Series inner
///   loops update running products in place via the assign-by-reference forms
/// - Operators with `u32` - Recurrence denominators and small scale factors
///   stay in machine integers
/// - `Send + Sync` - All evaluators are pure, so values may cross threads
///
/// Implementations are expected to carry enough guard precision that a few
/// thousand rounding errors stay below `epsilon()`.
pub trait Real:
    Sized
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Add<u32, Output = Self>
    + Sub<u32, Output = Self>
    + Mul<u32, Output = Self>
    + Div<u32, Output = Self>
    + AddAssign<u32>
    + DivAssign<u32>
{
    /// Decimal digits of working precision carried by this type
    fn digits10() -> u32;

    /// Machine epsilon: one unit in the last working decimal digit, 10^(1-digits10)
    fn epsilon() -> Self;

    /// The constant pi at working precision
    fn pi() -> Self;

    /// The constant pi/2 at working precision
    fn half_pi() -> Self;

    /// Exact conversion from a small unsigned integer
    fn from_u32(v: u32) -> Self;

    /// Exact conversion from a small signed integer
    fn from_i32(v: i32) -> Self;

    /// The correctly rounded value of `numer / denom`
    fn from_ratio(numer: i64, denom: i64) -> Self;

    /// Parse a decimal digit string, e.g. `"-0.9424888..."`
    ///
    /// Returns `None` if the string is not a valid decimal number. Exponent
    /// suffixes in `E` notation are accepted.
    fn from_decimal(digits: &str) -> Option<Self>;

    /// Absolute value
    fn abs(self) -> Self;

    /// Largest integer-valued number not above `self`
    fn floor(self) -> Self;

    /// Integer power
    fn powi(self, n: i32) -> Self;

    /// Real power; `self` must be non-negative unless the exponent is an integer
    fn powf(self, exponent: &Self) -> Self;

    /// Convert to `u32`, if the value is representable
    fn to_u32(&self) -> Option<u32>;

    /// Whether the value is exactly an integer
    fn is_integer(&self) -> bool;

    /// Whether the value is neither infinite nor NaN
    fn is_finite(&self) -> bool;
}

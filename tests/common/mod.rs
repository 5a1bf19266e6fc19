//! Common test utilities
#![allow(dead_code)]

use num_traits::One;
use specfun::prelude::*;

/// Parse a decimal literal into `R`, panicking on malformed input
pub fn dec<R: Real>(digits: &str) -> R {
    match R::from_decimal(digits) {
        Some(value) => value,
        None => panic!("malformed decimal literal: {digits}"),
    }
}

/// Assert the signed relative departure of `value` from `control` is small
///
/// Uses the formula: |1 - value / control| < tol
pub fn assert_rel_close<R: Real>(value: &R, control: &R, tol: &R, msg: &str) {
    let departure = (R::one() - value.clone() / control).abs();
    assert!(
        departure < *tol,
        "{}: {} departs from control {} by {} (tol {})",
        msg,
        value,
        control,
        departure,
        tol
    );
}

/// Assert the magnitude-relative departure of `value` from `control` is small
///
/// Uses the formula: |1 - |value / control|| < tol
pub fn assert_rel_close_magnitude<R: Real>(value: &R, control: &R, tol: &R, msg: &str) {
    let departure = (R::one() - (value.clone() / control).abs()).abs();
    assert!(
        departure < *tol,
        "{}: |{}| departs from |control| {} by {} (tol {})",
        msg,
        value,
        control,
        departure,
        tol
    );
}

//! Series evaluation diagnostics and iteration budgets
//!
//! Every series in this crate terminates on an epsilon-scaled tolerance, with
//! a hard term budget as a backstop. The budgets grow with the working
//! precision so that a type carrying thousands of digits is never cut off
//! earlier than its tolerance allows. Hitting a budget is not an error: the
//! truncated sum is still the best value available, so the `_eval` entry
//! points return it together with a cleared `converged` flag and leave the
//! decision to the caller.

/// Minimum term budget for the trigonometric kernels
const TRIG_TERMS_FLOOR: u32 = 10_000;

/// Minimum term budget for the hypergeometric series
const HYP2F1_TERMS_FLOOR: u32 = 100_000;

/// Result of a series evaluation, with convergence diagnostics
///
/// `value` always holds the accumulated sum. `converged` is true when the
/// tolerance test ended the loop, false when the term budget did; `terms` is
/// the index of the last term added either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<R> {
    /// The accumulated sum
    pub value: R,
    /// Whether the tolerance-based termination fired before the term budget
    pub converged: bool,
    /// Index of the last term added to the sum
    pub terms: u32,
}

/// Term budget for the sin/cos kernels at a given working precision
///
/// The reduced argument never exceeds one tenth, so the series gains well
/// over one decimal digit per term and the linear factor is a generous
/// overestimate. The floor keeps low-precision configurations from ever
/// tripping the budget before the tolerance test.
pub fn trig_series_budget(digits10: u32) -> u32 {
    TRIG_TERMS_FLOOR.max(16 * digits10)
}

/// Term budget for the ₂F₁ series at a given working precision
///
/// Convergence slows as |x| approaches 1, so this budget is far looser than
/// the trigonometric one.
pub fn hyp2f1_series_budget(digits10: u32) -> u32 {
    HYP2F1_TERMS_FLOOR.max(64 * digits10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_floors() {
        assert_eq!(trig_series_budget(10), 10_000);
        assert_eq!(trig_series_budget(100), 10_000);
        assert_eq!(hyp2f1_series_budget(10), 100_000);
        assert_eq!(hyp2f1_series_budget(1001), 100_000);
    }

    #[test]
    fn test_budget_scales_with_precision() {
        assert_eq!(trig_series_budget(1001), 16 * 1001);
        assert_eq!(hyp2f1_series_budget(10_000), 640_000);
        assert!(trig_series_budget(100_000) > trig_series_budget(1001));
    }
}

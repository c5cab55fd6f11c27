//! Property-based invariant tests for the contrast evaluator.
//!
//! These tests verify structural invariants that must hold for **any** pair
//! of in-domain luminances:
//!
//! 1. Symmetry: swapping the inputs never changes the ratio.
//! 2. Identity: equal luminances give exactly 1.0.
//! 3. Bounds: every ratio lies in [1.0, 21.0].
//! 4. Verdict consistency: `is_accessible` is `ratio >= threshold`.
//! 5. Threshold monotonicity: passing 4.5 implies passing 3.0.
//! 6. Boundary agreement: `try_evaluate` matches the free functions.
//! 7. Boundary rejection: out-of-domain luminance is never accepted.

use contrast_core::{
    ContrastError, ContrastEvaluator, Luminance, MAX_RATIO, MIN_RATIO, Threshold, compute_ratio,
    is_accessible,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn luminance_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0]
}

fn threshold_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(3.0), Just(4.5), Just(7.0), 1.0f64..=21.0]
}

fn out_of_domain_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6f64..-1.0e-9,
        (1.0f64 + 1.0e-9)..1.0e6,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Ratio shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ratio_is_symmetric(a in luminance_strategy(), b in luminance_strategy()) {
        prop_assert_eq!(compute_ratio(a, b), compute_ratio(b, a));
    }

    #[test]
    fn identical_luminance_is_minimum(a in luminance_strategy()) {
        prop_assert_eq!(compute_ratio(a, a), MIN_RATIO);
    }

    #[test]
    fn ratio_stays_within_bounds(a in luminance_strategy(), b in luminance_strategy()) {
        let ratio = compute_ratio(a, b);
        prop_assert!(ratio >= MIN_RATIO, "ratio {} below 1", ratio);
        prop_assert!(ratio <= MAX_RATIO, "ratio {} above 21", ratio);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Verdicts
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn verdict_matches_ratio(
        a in luminance_strategy(),
        b in luminance_strategy(),
        threshold in threshold_strategy(),
    ) {
        prop_assert_eq!(is_accessible(a, b, threshold), compute_ratio(a, b) >= threshold);
    }

    #[test]
    fn normal_text_pass_implies_large_text_pass(
        a in luminance_strategy(),
        b in luminance_strategy(),
    ) {
        if is_accessible(a, b, 4.5) {
            prop_assert!(is_accessible(a, b, 3.0));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Validated boundary
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn try_evaluate_agrees_with_free_functions(
        a in luminance_strategy(),
        b in luminance_strategy(),
        threshold in threshold_strategy(),
    ) {
        let evaluator = ContrastEvaluator::new(Threshold::new(threshold).unwrap());
        let result = evaluator.try_evaluate(a, b).unwrap();
        prop_assert_eq!(result.ratio(), compute_ratio(a, b));
        prop_assert_eq!(result.passes(), is_accessible(a, b, threshold));
        prop_assert_eq!(result.threshold().get(), threshold);
    }

    #[test]
    fn out_of_domain_luminance_is_rejected(bad in out_of_domain_strategy(), good in luminance_strategy()) {
        prop_assert!(Luminance::new(bad).is_err());
        let evaluator = ContrastEvaluator::default();
        let rejected = matches!(
            evaluator.try_evaluate(good, bad),
            Err(ContrastError::LuminanceOutOfRange { .. })
        );
        prop_assert!(rejected);
    }
}

#[test]
fn concurrent_callers_agree() {
    let evaluator = ContrastEvaluator::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                evaluator
                    .try_evaluate(0.8, 0.1)
                    .map(|result| (result.ratio(), result.passes()))
            })
        })
        .collect();
    for handle in handles {
        let (ratio, passes) = handle.join().unwrap().unwrap();
        assert_eq!(ratio, compute_ratio(0.8, 0.1));
        assert!(passes);
    }
}

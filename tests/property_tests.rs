//! Property-based tests for divergence analysis.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use kl_evolution::core::Serie;
use kl_evolution::evaluation::{evaluate_forecast, EvaluationConfig};
use kl_evolution::features::{kl_divergence, AnalyzerConfig, ShiftedSerieAnalyzer};
use proptest::prelude::*;

/// Strategy for strictly positive, non-constant values.
fn positive_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        prop::collection::vec(1.0..1000.0_f64, len).prop_map(|mut v| {
            for (i, val) in v.iter_mut().enumerate() {
                *val += (i as f64) * 0.001;
            }
            v
        })
    })
}

/// Strategy for values that may contain missing observations.
fn values_with_gaps_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![4 => (0.1..100.0_f64), 1 => Just(f64::NAN)],
        min_len..max_len,
    )
}

// =============================================================================
// Property: degenerate-distribution policy
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn divergence_of_a_serie_with_itself_is_zero(values in positive_values_strategy(1, 100)) {
        let p = Serie::new(values.clone());
        let q = Serie::new(values);
        prop_assert_eq!(kl_divergence(&p, &q).unwrap(), 0.0);
    }

    #[test]
    fn zero_p_gives_zero_for_any_q(
        len in 1usize..50,
        q in values_with_gaps_strategy(1, 50)
    ) {
        let p = Serie::new(vec![0.0; len]);
        prop_assert_eq!(kl_divergence(&p, &Serie::new(q)).unwrap(), 0.0);
    }

    #[test]
    fn zero_q_gives_infinity(values in positive_values_strategy(1, 50)) {
        let q = Serie::new(vec![0.0; values.len()]);
        prop_assert_eq!(kl_divergence(&Serie::new(values), &q).unwrap(), f64::INFINITY);
    }

    #[test]
    fn divergence_is_non_negative(
        (p, q) in (2usize..60).prop_flat_map(|len| (
            prop::collection::vec(0.1..100.0_f64, len),
            prop::collection::vec(0.1..100.0_f64, len),
        ))
    ) {
        let dkl = kl_divergence(&Serie::new(p), &Serie::new(q)).unwrap();
        prop_assert!(dkl.is_finite());
        prop_assert!(dkl >= -1e-12);
    }
}

// =============================================================================
// Property: shift keeps length and blanks the leading positions
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn shift_blanks_leading_positions(
        values in positive_values_strategy(2, 100),
        lag in 1usize..100
    ) {
        let serie = Serie::new(values.clone());
        let shifted = serie.shift(lag as isize);
        prop_assert_eq!(shifted.len(), values.len());

        let blanked = lag.min(values.len());
        prop_assert!(shifted.values()[..blanked].iter().all(|v| v.is_nan()));
        for i in blanked..values.len() {
            prop_assert_eq!(shifted.values()[i], values[i - lag]);
        }
    }
}

// =============================================================================
// Property: one finite-or-infinite divergence per lag
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn profile_length_matches_horizon(
        values in positive_values_strategy(2, 60),
        horizon in 1usize..30
    ) {
        let analyzer = ShiftedSerieAnalyzer::new(horizon, false);
        let profile = analyzer.compute(&Serie::new(values)).unwrap();
        prop_assert_eq!(profile.len(), horizon);
        prop_assert!(profile.values().iter().all(|v| !v.is_nan() && *v >= -1e-12));
    }

    #[test]
    fn seeded_profiles_are_reproducible(
        values in positive_values_strategy(5, 60),
        horizon in 1usize..10,
        seed in any::<u64>()
    ) {
        let serie = Serie::new(values);
        let config = AnalyzerConfig::new(horizon).with_seed(seed);
        let a = ShiftedSerieAnalyzer::with_config(config.clone()).compute(&serie).unwrap();
        let b = ShiftedSerieAnalyzer::with_config(config).compute(&serie).unwrap();
        prop_assert_eq!(a.values(), b.values());
    }
}

// =============================================================================
// Property: normalized evaluation is relative to the uniform baseline
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn normalized_uniform_score_is_one(
        train in positive_values_strategy(5, 40),
        test in positive_values_strategy(5, 40),
        seed in any::<u64>()
    ) {
        let train = Serie::new(train);
        let test = Serie::new(test);

        let raw = evaluate_forecast(&train, &test, &[], &EvaluationConfig::new().with_seed(seed))
            .unwrap();
        let normalized = evaluate_forecast(
            &train,
            &test,
            &[],
            &EvaluationConfig::new().with_seed(seed).with_normalization(true),
        )
        .unwrap();

        prop_assert_eq!(normalized.get("uniform"), Some(1.0));
        let uniform = raw.get("uniform").unwrap();
        for (label, value) in raw.iter() {
            prop_assert_eq!(normalized.get(label), Some(value / uniform));
        }
    }
}

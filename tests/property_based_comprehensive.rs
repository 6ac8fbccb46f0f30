//! Property-based tests for the detection pipeline
//!
//! Core properties covered:
//! 1. Error scoring (identity, symmetry, length checks)
//! 2. Detector output lengths and the alpha = 1 equivalence
//! 3. Tuning never does worse than alpha = 0
//! 4. Welch's test sanity on samples with equal means

use hypoalert::detector::{Detector, FilteredDetector, SimpleDetector};
use hypoalert::scorer::score;
use hypoalert::stats::{one_sample_t_test, welch_t_test, Tail};
use hypoalert::tuner::ParameterTuner;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_identity(labels in prop::collection::vec(any::<bool>(), 0..500)) {
        prop_assert_eq!(score(&labels, &labels).unwrap(), 0);
    }

    #[test]
    fn prop_score_symmetric(
        pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..500),
    ) {
        let (a, b): (Vec<bool>, Vec<bool>) = pairs.into_iter().unzip();
        prop_assert_eq!(score(&a, &b).unwrap(), score(&b, &a).unwrap());
        prop_assert!(score(&a, &b).unwrap() <= a.len());
    }

    #[test]
    fn prop_score_rejects_unequal_lengths(
        a in prop::collection::vec(any::<bool>(), 0..50),
        extra in 1usize..10,
    ) {
        let b = vec![false; a.len() + extra];
        prop_assert!(score(&a, &b).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_detectors_preserve_length(
        observation in prop::collection::vec(0.0f64..150.0, 0..300),
        alpha in 0.0f64..=1.0,
    ) {
        let simple = SimpleDetector::new(54.0).classify(&observation);
        let filtered = FilteredDetector::new(54.0, alpha).unwrap().classify(&observation);

        prop_assert_eq!(simple.len(), observation.len());
        prop_assert_eq!(filtered.len(), observation.len());
    }

    #[test]
    fn prop_alpha_one_equals_simple(
        observation in prop::collection::vec(-50.0f64..200.0, 0..300),
    ) {
        let simple = SimpleDetector::new(54.0).classify(&observation);
        let filtered = FilteredDetector::new(54.0, 1.0).unwrap().classify(&observation);
        prop_assert_eq!(simple, filtered);
    }

    #[test]
    fn prop_alpha_outside_unit_interval_rejected(alpha in 1.0001f64..100.0) {
        prop_assert!(FilteredDetector::new(54.0, alpha).is_err());
        prop_assert!(FilteredDetector::new(54.0, -alpha).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_tuned_never_worse_than_alpha_zero(
        samples in prop::collection::vec((30.0f64..80.0, any::<bool>()), 2..120),
    ) {
        let (observation, truth): (Vec<f64>, Vec<bool>) = samples.into_iter().unzip();

        let tuner = ParameterTuner::exhaustive(54.0, 1000).unwrap();
        let outcome = tuner.tune(&observation, &truth).unwrap();

        let at_zero = FilteredDetector::classify_with_alpha(54.0, &observation, 0.0).unwrap();
        prop_assert!(outcome.best_errors <= score(&at_zero, &truth).unwrap());
        prop_assert!((0.0..1.0).contains(&outcome.best_alpha));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_welch_permuted_samples_have_zero_statistic(
        a in prop::collection::vec(-10.0f64..10.0, 2..60),
    ) {
        prop_assume!(a.iter().any(|&v| v != a[0]));

        // Same values in another order: equal means and variances
        let b: Vec<f64> = a.iter().rev().copied().collect();

        let report = welch_t_test(&a, &b).unwrap();
        prop_assert!(report.statistic.abs() < 1e-6, "t = {}", report.statistic);
        prop_assert!(report.pvalue > 0.999, "p = {}", report.pvalue);
    }

    #[test]
    fn prop_pvalues_in_unit_interval(
        sample in prop::collection::vec(0u32..20, 3..80),
        target in 0.0f64..20.0,
    ) {
        let values: Vec<f64> = sample.iter().map(|&v| v as f64).collect();
        prop_assume!(values.iter().any(|&v| v != values[0]));

        for tail in [Tail::TwoSided, Tail::Greater, Tail::Less] {
            let report = one_sample_t_test(&values, target, tail).unwrap();
            prop_assert!((0.0..=1.0).contains(&report.pvalue));
            prop_assert_eq!(report.df, Some(values.len() as f64 - 1.0));
        }
    }
}

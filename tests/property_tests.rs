//! Property-based tests using proptest.
//!
//! These tests verify the invariants every coding scheme shares.

use contrastar::prelude::*;
use proptest::prelude::*;

// Strategy for generating distinct levels in arbitrary order
fn levels_strategy() -> impl Strategy<Value = Vec<i32>> {
    (2..=10usize)
        .prop_flat_map(|k| Just((0..k as i32).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn simple_shape_and_labels(levels in levels_strategy()) {
        let k = levels.len();
        let contrast = Simple::new()
            .code_without_intercept(&levels)
            .expect("valid levels");

        prop_assert_eq!(contrast.matrix().shape(), (k, k - 1));
        prop_assert_eq!(contrast.labels().len(), k - 1);
        for (label, level) in contrast.labels().iter().zip(levels.iter()) {
            prop_assert_eq!(label, &format!("[Simp.{level}]"));
        }
    }

    #[test]
    fn simple_columns_sum_to_zero(levels in levels_strategy()) {
        let contrast = Simple::new()
            .code_without_intercept(&levels)
            .expect("valid levels");

        for j in 0..levels.len() - 1 {
            prop_assert!(contrast.matrix().column(j).sum().abs() < 1e-4);
        }
    }

    #[test]
    fn with_intercept_extends_without(levels in levels_strategy()) {
        let k = levels.len();
        let plain = Sum::new()
            .code_without_intercept(&levels)
            .expect("valid levels");
        let full = Sum::new()
            .code_with_intercept(&levels)
            .expect("valid levels");

        prop_assert_eq!(full.matrix().shape(), (k, k));
        prop_assert!(full.has_intercept());
        for i in 0..k {
            prop_assert_eq!(full.matrix().get(i, 0), 1.0);
            for j in 0..k - 1 {
                prop_assert_eq!(full.matrix().get(i, j + 1), plain.matrix().get(i, j));
            }
        }
    }

    #[test]
    fn coding_is_deterministic(levels in levels_strategy()) {
        let first = Diff::new()
            .code_without_intercept(&levels)
            .expect("valid levels");
        let second = Diff::new()
            .code_without_intercept(&levels)
            .expect("valid levels");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn poly_columns_orthonormal(levels in levels_strategy()) {
        let contrast = Poly::new()
            .code_without_intercept(&levels)
            .expect("valid levels");

        let m = contrast.matrix();
        for a in 0..levels.len() - 1 {
            prop_assert!((m.column(a).dot(&m.column(a)) - 1.0).abs() < 1e-3);
            for b in a + 1..levels.len() - 1 {
                prop_assert!(m.column(a).dot(&m.column(b)).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn expand_selects_contrast_rows(
        levels in levels_strategy(),
        raw_codes in proptest::collection::vec(0..100usize, 0..40),
    ) {
        let k = levels.len();
        let contrast = Helmert::new()
            .code_without_intercept(&levels)
            .expect("valid levels");

        let codes: Vec<usize> = raw_codes.iter().map(|c| c % k).collect();
        let design = contrast.expand(&codes).expect("codes in range");

        prop_assert_eq!(design.shape(), (codes.len(), k - 1));
        for (obs, &code) in codes.iter().enumerate() {
            let design_row = design.row(obs);
            let contrast_row = contrast.matrix().row(code);
            prop_assert_eq!(
                design_row.as_slice(),
                contrast_row.as_slice()
            );
        }
    }

    #[test]
    fn level_codes_inverts_level_lookup(levels in levels_strategy()) {
        let codes = level_codes(&levels, &levels).expect("levels map to themselves");
        let expected: Vec<usize> = (0..levels.len()).collect();
        prop_assert_eq!(codes, expected);
    }
}

// =========================================================================
// FALSIFY-CC: contrast coding contract (contrastar contrast)
//
// References:
//   - UCLA IDRE, "R Library: Contrast coding systems for categorical
//     variables"
// =========================================================================

use super::*;

type CodeFn = Box<dyn Fn(&[i32]) -> crate::error::Result<ContrastMatrix>>;

/// Every scheme under its display name, coding without intercept.
fn all_schemes() -> Vec<(&'static str, CodeFn)> {
    vec![
        (
            "treatment",
            Box::new(|l: &[i32]| Treatment::new().code_without_intercept(l)),
        ),
        (
            "simple",
            Box::new(|l: &[i32]| Simple::new().code_without_intercept(l)),
        ),
        (
            "sum",
            Box::new(|l: &[i32]| Sum::new().code_without_intercept(l)),
        ),
        (
            "diff",
            Box::new(|l: &[i32]| Diff::new().code_without_intercept(l)),
        ),
        (
            "helmert",
            Box::new(|l: &[i32]| Helmert::new().code_without_intercept(l)),
        ),
        (
            "poly",
            Box::new(|l: &[i32]| Poly::new().code_without_intercept(l)),
        ),
    ]
}

/// Schemes whose columns are true contrasts (sum to zero); treatment's
/// dummy columns are excluded by construction.
fn zero_sum_schemes() -> Vec<(&'static str, CodeFn)> {
    all_schemes()
        .into_iter()
        .filter(|(name, _)| *name != "treatment")
        .collect()
}

/// FALSIFY-CC-001: K levels produce a K x (K-1) matrix with K-1 labels
#[test]
fn falsify_cc_001_shape() {
    for k in 2..=8 {
        let levels: Vec<i32> = (1..=k as i32).collect();
        for (name, code) in all_schemes() {
            let contrast = code(&levels).expect("valid levels");
            assert_eq!(
                contrast.matrix().shape(),
                (k, k - 1),
                "FALSIFIED CC-001: {name} shape for K={k}"
            );
            assert_eq!(
                contrast.labels().len(),
                k - 1,
                "FALSIFIED CC-001: {name} label count for K={k}"
            );
        }
    }
}

/// FALSIFY-CC-002: contrast columns sum to zero
#[test]
fn falsify_cc_002_column_sums() {
    for k in 2..=8 {
        let levels: Vec<i32> = (1..=k as i32).collect();
        for (name, code) in zero_sum_schemes() {
            let contrast = code(&levels).expect("valid levels");
            for j in 0..k - 1 {
                let sum = contrast.matrix().column(j).sum();
                assert!(
                    sum.abs() < 1e-4,
                    "FALSIFIED CC-002: {name} column {j} sums to {sum} (K={k})"
                );
            }
        }
    }
}

/// FALSIFY-CC-003: with-intercept output is ones column + without-intercept
#[test]
fn falsify_cc_003_intercept_composition() {
    let levels = [1, 2, 3, 4, 5];
    let schemes: Vec<(&str, CodeFn, CodeFn)> = vec![
        (
            "simple",
            Box::new(|l: &[i32]| Simple::new().code_without_intercept(l)),
            Box::new(|l: &[i32]| Simple::new().code_with_intercept(l)),
        ),
        (
            "helmert",
            Box::new(|l: &[i32]| Helmert::new().code_without_intercept(l)),
            Box::new(|l: &[i32]| Helmert::new().code_with_intercept(l)),
        ),
        (
            "poly",
            Box::new(|l: &[i32]| Poly::new().code_without_intercept(l)),
            Box::new(|l: &[i32]| Poly::new().code_with_intercept(l)),
        ),
    ];
    for (name, without, with) in schemes {
        let plain = without(&levels).expect("valid levels");
        let full = with(&levels).expect("valid levels");

        assert!(full.has_intercept(), "FALSIFIED CC-003: {name} flag");
        assert_eq!(
            full.matrix().shape(),
            (5, 5),
            "FALSIFIED CC-003: {name} shape"
        );
        for i in 0..5 {
            assert!(
                (full.matrix().get(i, 0) - 1.0).abs() < 1e-6,
                "FALSIFIED CC-003: {name} intercept column not all ones"
            );
            for j in 0..4 {
                assert_eq!(
                    full.matrix().get(i, j + 1),
                    plain.matrix().get(i, j),
                    "FALSIFIED CC-003: {name} contrast columns not preserved bitwise"
                );
            }
        }
        assert_eq!(
            full.labels(),
            plain.labels(),
            "FALSIFIED CC-003: {name} labels changed"
        );
    }
}

/// FALSIFY-CC-004: bracketed schemes label as [<prefix><level>] in input order
#[test]
fn falsify_cc_004_label_form() {
    let levels = [7, 5, 3, 1];
    let cases: Vec<(&str, CodeFn, &str)> = vec![
        (
            "simple",
            Box::new(|l: &[i32]| Simple::new().code_without_intercept(l)),
            "Simp.",
        ),
        (
            "sum",
            Box::new(|l: &[i32]| Sum::new().code_without_intercept(l)),
            "S.",
        ),
        (
            "diff",
            Box::new(|l: &[i32]| Diff::new().code_without_intercept(l)),
            "D.",
        ),
    ];
    for (name, code, prefix) in cases {
        let contrast = code(&levels).expect("valid levels");
        let expected: Vec<String> = levels[..3]
            .iter()
            .map(|level| format!("[{prefix}{level}]"))
            .collect();
        assert_eq!(
            contrast.labels(),
            expected.as_slice(),
            "FALSIFIED CC-004: {name} labels"
        );
    }
}

/// FALSIFY-CC-005: coding is deterministic (referential transparency)
#[test]
fn falsify_cc_005_determinism() {
    let levels = [3, 1, 4, 2];
    for (name, code) in all_schemes() {
        let first = code(&levels).expect("valid levels");
        let second = code(&levels).expect("valid levels");
        assert_eq!(first, second, "FALSIFIED CC-005: {name} not deterministic");
    }
}

/// FALSIFY-CC-006: K < 2 and duplicate levels fail fast for every scheme
#[test]
fn falsify_cc_006_fail_fast() {
    for (name, code) in all_schemes() {
        assert!(
            code(&[]).is_err(),
            "FALSIFIED CC-006: {name} accepted zero levels"
        );
        assert!(
            code(&[1]).is_err(),
            "FALSIFIED CC-006: {name} accepted one level"
        );
        assert!(
            code(&[1, 2, 1]).is_err(),
            "FALSIFIED CC-006: {name} accepted duplicate levels"
        );
    }
}

mod cc_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-CC-002-prop: simple coding columns sum to zero for random K
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_cc_002_prop_simple_zero_sum(k in 2..=12usize) {
            let levels: Vec<i32> = (0..k as i32).collect();
            let contrast = Simple::new()
                .code_without_intercept(&levels)
                .expect("valid levels");

            for j in 0..k - 1 {
                let sum = contrast.matrix().column(j).sum();
                prop_assert!(
                    sum.abs() < 1e-4,
                    "FALSIFIED CC-002-prop: column {} sums to {} (K={})",
                    j, sum, k
                );
            }
        }
    }

    /// FALSIFY-CC-007-prop: permuting levels permutes simple-coding rows
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_cc_007_prop_row_permutation(k in 2..=8usize, rotation in 0..8usize) {
            let levels: Vec<i32> = (1..=k as i32).collect();
            let mut rotated = levels.clone();
            rotated.rotate_left(rotation % k);

            let base = Simple::new()
                .code_without_intercept(&levels)
                .expect("valid levels");
            let permuted = Simple::new()
                .code_without_intercept(&rotated)
                .expect("valid levels");

            // Values depend only on position, labels follow the input order
            prop_assert_eq!(base.matrix(), permuted.matrix());
            let expected: Vec<String> = rotated[..k - 1]
                .iter()
                .map(|level| format!("[Simp.{level}]"))
                .collect();
            prop_assert_eq!(permuted.labels(), expected.as_slice());
        }
    }
}

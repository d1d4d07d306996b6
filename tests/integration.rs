//! End-to-end tests: code a categorical variable and expand observations
//! into design-matrix rows, the way the codings are consumed by a linear
//! model.

use contrastar::prelude::*;

// First observations of the `race` column in the UCLA hsb2 sample
// (1 = Hispanic, 2 = Asian, 3 = African American, 4 = Caucasian).
const RACE_HEAD: [i32; 10] = [4, 4, 4, 4, 4, 4, 3, 1, 4, 3];

#[test]
fn treatment_design_rows_for_observations() {
    let levels = [1, 2, 3, 4];
    let contrast = Treatment::new()
        .code_without_intercept(&levels)
        .expect("valid levels");

    let codes = level_codes(&levels, &RACE_HEAD).expect("all observations declared");
    let design = contrast.expand(&codes).expect("codes in range");

    assert_eq!(design.shape(), (10, 3));
    // Caucasian observation: indicator in the last column
    assert_eq!(design.row(0).as_slice(), &[0.0, 0.0, 1.0]);
    // African American observation
    assert_eq!(design.row(6).as_slice(), &[0.0, 1.0, 0.0]);
    // Hispanic observation: the reference level, all zeros
    assert_eq!(design.row(7).as_slice(), &[0.0, 0.0, 0.0]);
}

#[test]
fn simple_design_rows_match_contrast_rows() {
    let levels = [1, 2, 3, 4];
    let contrast = Simple::new()
        .code_without_intercept(&levels)
        .expect("valid levels");

    let codes = level_codes(&levels, &RACE_HEAD).expect("all observations declared");
    let design = contrast.expand(&codes).expect("codes in range");

    for (obs, &code) in codes.iter().enumerate() {
        assert_eq!(
            design.row(obs).as_slice(),
            contrast.matrix().row(code).as_slice(),
            "observation {obs} does not carry the row for its level"
        );
    }
}

#[test]
fn intercept_column_orthogonal_to_contrast_columns() {
    // For a true contrast, the Gram matrix of the with-intercept coding has
    // zeros between the intercept column and every contrast column.
    let contrast = Simple::new()
        .code_with_intercept(&[1, 2, 3, 4])
        .expect("valid levels");

    let m = contrast.matrix();
    let gram = m.transpose().matmul(m).expect("compatible dimensions");
    for j in 1..4 {
        assert!(
            gram.get(0, j).abs() < 1e-5,
            "intercept not orthogonal to contrast column {j}"
        );
    }
}

#[test]
fn string_levels_work_end_to_end() {
    let levels = ["low", "mid", "high"];
    let observations = ["high", "high", "low", "mid"];

    let contrast = Helmert::new()
        .code_without_intercept(&levels)
        .expect("valid levels");
    let codes = level_codes(&levels, &observations).expect("all observations declared");
    let design = contrast.expand(&codes).expect("codes in range");

    assert_eq!(design.shape(), (4, 2));
    assert_eq!(contrast.labels(), ["[H.mid]", "[H.high]"]);
    // "high" is the last level: row [-1, 2] scaled by the Helmert pattern
    assert_eq!(design.row(0).as_slice(), &[0.0, 2.0]);
}

#[test]
fn contrast_matrix_serde_round_trip() {
    let contrast = Helmert::new()
        .code_with_intercept(&[1, 2, 3, 4])
        .expect("valid levels");

    let json = serde_json::to_string(&contrast).expect("serializes");
    let back: ContrastMatrix = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(contrast, back);
}

#[test]
fn scheme_config_serde_round_trip() {
    let scheme = Treatment::new().with_reference(2);
    let json = serde_json::to_string(&scheme).expect("serializes");
    let back: Treatment = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back.reference(), 2);

    let poly = Poly::new().with_scores(vec![0.0, 1.0, 4.0]);
    let json = serde_json::to_string(&poly).expect("serializes");
    let back: Poly = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, poly);
}

//! Orthogonal polynomial coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::{ContrastarError, Result};
use crate::primitives::Matrix;

/// Orthogonal polynomial coding.
///
/// For K ordered levels, the coefficients are the linear, quadratic, ...,
/// degree-(K-1) trends in the categorical variable. The levels are assumed
/// to map to equally spaced numeric scores 0..K-1 unless custom scores are
/// supplied, so this coding is meant for ordered variables.
///
/// Columns are the orthonormalized polynomial basis of the scores with the
/// constant term dropped: mutually orthogonal, unit length, each orthogonal
/// to the constant vector.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Poly};
///
/// let contrast = Poly::new().code_without_intercept(&["low", "mid", "high"]).unwrap();
/// assert_eq!(contrast.labels(), [".Linear", ".Quadratic"]);
///
/// // Linear trend over three equally spaced levels
/// let linear = contrast.matrix().column(0);
/// assert!((linear[0] + 1.0 / 2.0_f32.sqrt()).abs() < 1e-4);
/// assert!(linear[1].abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Poly {
    scores: Option<Vec<f32>>,
}

impl Poly {
    /// Creates polynomial coding with equally spaced scores 0..K-1.
    #[must_use]
    pub fn new() -> Self {
        Self { scores: None }
    }

    /// Supplies custom numeric scores, one per level.
    #[must_use]
    pub fn with_scores(mut self, scores: Vec<f32>) -> Self {
        self.scores = Some(scores);
        self
    }

    fn resolve_scores(&self, n: usize) -> Result<Vec<f64>> {
        match &self.scores {
            None => Ok((0..n).map(|i| i as f64).collect()),
            Some(scores) => {
                if scores.len() != n {
                    return Err(ContrastarError::InvalidScores {
                        message: format!("expected {n} scores, got {}", scores.len()),
                    });
                }
                for (i, score) in scores.iter().enumerate() {
                    if scores[..i].iter().any(|prev| prev == score) {
                        return Err(ContrastarError::InvalidScores {
                            message: format!("scores must be distinct, {score} repeats"),
                        });
                    }
                }
                Ok(scores.iter().map(|&s| f64::from(s)).collect())
            }
        }
    }
}

/// Orthonormalizes the Vandermonde basis of the scores by modified
/// Gram-Schmidt, accumulating in f64. Column d is the degree-d polynomial.
fn orthonormal_basis(scores: &[f64]) -> Result<Vec<Vec<f64>>> {
    let n = scores.len();
    let mut basis: Vec<Vec<f64>> = Vec::with_capacity(n);
    for degree in 0..n {
        let mut column: Vec<f64> = scores.iter().map(|s| s.powi(degree as i32)).collect();
        for prev in &basis {
            let proj: f64 = column.iter().zip(prev.iter()).map(|(c, p)| c * p).sum();
            for (c, p) in column.iter_mut().zip(prev.iter()) {
                *c -= proj * p;
            }
        }
        let norm = column.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm <= 1e-10 {
            return Err(ContrastarError::InvalidScores {
                message: format!("scores are numerically collinear at degree {degree}"),
            });
        }
        for c in &mut column {
            *c /= norm;
        }
        basis.push(column);
    }
    Ok(basis)
}

fn poly_labels(n: usize) -> Vec<String> {
    (1..n)
        .map(|degree| match degree {
            1 => ".Linear".to_string(),
            2 => ".Quadratic".to_string(),
            3 => ".Cubic".to_string(),
            d => format!("^{d}"),
        })
        .collect()
}

impl ContrastScheme for Poly {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();
        let scores = self.resolve_scores(n)?;
        let basis = orthonormal_basis(&scores)?;

        // Drop the constant column; keep degrees 1..K-1
        let mut contrast = Matrix::zeros(n, n - 1);
        for (j, column) in basis.iter().enumerate().skip(1) {
            for (i, &value) in column.iter().enumerate() {
                contrast.set(i, j - 1, value as f32);
            }
        }

        ContrastMatrix::new(contrast, poly_labels(n))
    }
}

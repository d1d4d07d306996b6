//! Simple (deviation-from-reference) contrast coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{name_levels, validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::Result;
use crate::primitives::Matrix;

/// Simple contrast coding.
///
/// Like treatment coding, each contrast compares one level with a fixed
/// reference level (the first). Unlike treatment coding, the intercept of a
/// model using these columns is the grand mean of the level means rather
/// than the reference level's mean: every column sums to zero.
///
/// Row 0 is the constant vector `[-1/K, ...]`; row i (i >= 1) has
/// `(K-1)/K` in column i-1 and `-1/K` everywhere else.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Simple};
///
/// let contrast = Simple::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
///
/// assert_eq!(contrast.matrix().shape(), (4, 3));
/// assert!((contrast.matrix().get(0, 0) - (-0.25)).abs() < 1e-6);
/// assert!((contrast.matrix().get(1, 0) - 0.75).abs() < 1e-6);
/// assert_eq!(contrast.labels(), ["[Simp.1]", "[Simp.2]", "[Simp.3]"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simple;

impl Simple {
    /// Creates a new Simple coding scheme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContrastScheme for Simple {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();
        let nf = n as f32;

        let mut contrast = Matrix::zeros(n, n - 1);
        for i in 0..n {
            for j in 0..n - 1 {
                contrast.set(i, j, -1.0 / nf);
            }
        }
        for j in 0..n - 1 {
            contrast.set(j + 1, j, (nf - 1.0) / nf);
        }

        ContrastMatrix::new(contrast, name_levels("Simp.", &levels[..n - 1]))
    }
}

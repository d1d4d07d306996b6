//! Backward difference coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{name_levels, validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::Result;
use crate::primitives::Matrix;

/// Backward difference coding.
///
/// Compares the mean of the dependent variable at each level with the mean
/// at the previous level: the coefficient on column j estimates
/// mean(level j+1) - mean(level j). Mostly useful for ordinal variables.
///
/// Column j holds `-(K-1-j)/K` in rows 0..=j and `(j+1)/K` below.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Diff};
///
/// let contrast = Diff::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
/// assert!((contrast.matrix().get(0, 0) - (-0.75)).abs() < 1e-6);
/// assert_eq!(contrast.labels(), ["[D.1]", "[D.2]", "[D.3]"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff;

impl Diff {
    /// Creates a new backward difference coding scheme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContrastScheme for Diff {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();
        let nf = n as f32;

        let mut contrast = Matrix::zeros(n, n - 1);
        for j in 0..n - 1 {
            let below = (j as f32 + 1.0) / nf;
            let above = below - 1.0;
            for i in 0..n {
                contrast.set(i, j, if i <= j { above } else { below });
            }
        }

        ContrastMatrix::new(contrast, name_levels("D.", &levels[..n - 1]))
    }
}

//! Sum (deviation) coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{name_levels, validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::Result;
use crate::primitives::Matrix;

/// Sum (deviation) coding.
///
/// Compares the mean of the dependent variable at each of the first K-1
/// levels with the overall mean across all levels; the intercept of a model
/// using these columns is the grand mean of the level means. Equivalent to
/// the parameterization that forces the level coefficients to sum to zero.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Sum};
///
/// let contrast = Sum::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
/// assert!((contrast.matrix().get(2, 2) - 1.0).abs() < 1e-6);
/// assert!((contrast.matrix().get(3, 2) - (-1.0)).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sum;

impl Sum {
    /// Creates a new Sum coding scheme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContrastScheme for Sum {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();

        // Identity on the first K-1 rows, last row all -1
        let mut contrast = Matrix::zeros(n, n - 1);
        for j in 0..n - 1 {
            contrast.set(j, j, 1.0);
            contrast.set(n - 1, j, -1.0);
        }

        ContrastMatrix::new(contrast, name_levels("S.", &levels[..n - 1]))
    }
}

//! Helmert (reverse Helmert) coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{name_levels, validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::Result;
use crate::primitives::Matrix;

/// Reverse Helmert coding.
///
/// Compares the mean of the dependent variable at each level with the mean
/// over all previous levels. Column j holds -1 in rows 0..=j, j+1 in row
/// j+1, and 0 below. The columns are left unnormalized, so each estimated
/// coefficient equals the corresponding mean difference only up to a
/// constant; the hypothesis tests are unaffected.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Helmert};
///
/// let contrast = Helmert::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
/// assert!((contrast.matrix().get(3, 2) - 3.0).abs() < 1e-6);
/// assert_eq!(contrast.labels(), ["[H.2]", "[H.3]", "[H.4]"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helmert;

impl Helmert {
    /// Creates a new reverse Helmert coding scheme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContrastScheme for Helmert {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();

        let mut contrast = Matrix::zeros(n, n - 1);
        for j in 0..n - 1 {
            for i in 0..=j {
                contrast.set(i, j, -1.0);
            }
            contrast.set(j + 1, j, (j + 1) as f32);
        }

        // Each column compares a level against everything before it,
        // so the labels name levels 2..K
        ContrastMatrix::new(contrast, name_levels("H.", &levels[1..]))
    }
}

//! Treatment (dummy) coding.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{validate_levels, ContrastMatrix, ContrastScheme};
use crate::error::{ContrastarError, Result};
use crate::primitives::Matrix;

/// Treatment (dummy) coding.
///
/// Compares each level of the categorical variable with a base reference
/// level, whose mean becomes the model intercept. One indicator column per
/// non-reference level, in input order. Strictly speaking this is not a
/// contrast: the columns sum to one, not zero, so they are not independent
/// of the intercept.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Treatment};
///
/// let contrast = Treatment::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
///
/// // Reference row (level 1) is all zeros
/// assert!((contrast.matrix().get(0, 0)).abs() < 1e-6);
/// assert!((contrast.matrix().get(1, 0) - 1.0).abs() < 1e-6);
/// assert_eq!(contrast.labels(), ["[T.2]", "[T.3]", "[T.4]"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    reference: usize,
}

impl Default for Treatment {
    fn default() -> Self {
        Self::new()
    }
}

impl Treatment {
    /// Creates treatment coding with the first level as reference.
    #[must_use]
    pub fn new() -> Self {
        Self { reference: 0 }
    }

    /// Sets the zero-based index of the reference level.
    #[must_use]
    pub fn with_reference(mut self, reference: usize) -> Self {
        self.reference = reference;
        self
    }

    /// Returns the reference level index.
    #[must_use]
    pub fn reference(&self) -> usize {
        self.reference
    }
}

impl ContrastScheme for Treatment {
    fn code_without_intercept<L: Display + PartialEq>(
        &self,
        levels: &[L],
    ) -> Result<ContrastMatrix> {
        validate_levels(levels)?;
        let n = levels.len();
        if self.reference >= n {
            return Err(ContrastarError::InvalidReference {
                reference: self.reference,
                n_levels: n,
            });
        }

        let mut contrast = Matrix::zeros(n, n - 1);
        let mut labels = Vec::with_capacity(n - 1);
        let mut col = 0;
        for (i, level) in levels.iter().enumerate() {
            if i == self.reference {
                continue;
            }
            contrast.set(i, col, 1.0);
            labels.push(format!("[T.{level}]"));
            col += 1;
        }

        ContrastMatrix::new(contrast, labels)
    }
}

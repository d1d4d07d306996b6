//! Contrast matrices and coding schemes for categorical variables.
//!
//! A categorical variable with K levels enters a linear model as K-1 numeric
//! columns. Each scheme in this module encodes a different set of linear
//! comparisons among the level means: [`Treatment`] compares against a
//! reference level, [`Simple`] against the grand mean, [`Sum`] against the
//! mean of all levels, [`Diff`] against the previous level, [`Helmert`]
//! against the mean of all previous levels, and [`Poly`] fits orthogonal
//! polynomial trends over ordered levels.
//!
//! # Example
//!
//! ```
//! use contrastar::contrast::{ContrastScheme, Sum};
//!
//! let contrast = Sum::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
//!
//! // Identity on the first three levels, last row all -1
//! assert!((contrast.matrix().get(0, 0) - 1.0).abs() < 1e-6);
//! assert!((contrast.matrix().get(3, 0) - (-1.0)).abs() < 1e-6);
//! assert_eq!(contrast.labels(), ["[S.1]", "[S.2]", "[S.3]"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{ContrastarError, Result};
use crate::primitives::Matrix;

mod diff;
mod helmert;
mod poly;
mod simple;
mod sum;
mod treatment;

pub use diff::Diff;
pub use helmert::Helmert;
pub use poly::Poly;
pub use simple::Simple;
pub use sum::Sum;
pub use treatment::Treatment;

/// A contrast matrix paired with one label per contrast column.
///
/// Immutable after construction: K rows (one per level), K-1 contrast
/// columns, and an optional unlabeled all-ones intercept column in front.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::{ContrastScheme, Simple};
///
/// let contrast = Simple::new().code_with_intercept(&["a", "b", "c"]).unwrap();
/// assert_eq!(contrast.matrix().shape(), (3, 3));
/// assert!(contrast.has_intercept());
/// assert_eq!(contrast.labels().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastMatrix {
    matrix: Matrix<f32>,
    labels: Vec<String>,
    has_intercept: bool,
}

impl ContrastMatrix {
    /// Creates a contrast matrix without an intercept column.
    ///
    /// # Errors
    ///
    /// Returns an error if the label count doesn't match the column count.
    pub fn new(matrix: Matrix<f32>, labels: Vec<String>) -> Result<Self> {
        if labels.len() != matrix.n_cols() {
            return Err(ContrastarError::DimensionMismatch {
                expected: format!("{} labels", matrix.n_cols()),
                actual: format!("{}", labels.len()),
            });
        }
        Ok(Self {
            matrix,
            labels,
            has_intercept: false,
        })
    }

    /// Prepends an all-ones intercept column.
    ///
    /// The intercept column carries no label; existing labels shift to
    /// columns 1..K-1 unchanged. Used by
    /// [`ContrastScheme::code_with_intercept`].
    #[must_use]
    pub fn prepend_intercept(self) -> Self {
        let (rows, cols) = self.matrix.shape();
        let mut matrix = Matrix::zeros(rows, cols + 1);
        for i in 0..rows {
            matrix.set(i, 0, 1.0);
            for j in 0..cols {
                matrix.set(i, j + 1, self.matrix.get(i, j));
            }
        }
        Self {
            matrix,
            labels: self.labels,
            has_intercept: true,
        }
    }

    /// Returns the numeric matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<f32> {
        &self.matrix
    }

    /// Returns the contrast column labels.
    ///
    /// The intercept column, when present, is unlabeled: label count equals
    /// column count minus one in that case.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns true if column 0 is an intercept column.
    #[must_use]
    pub fn has_intercept(&self) -> bool {
        self.has_intercept
    }

    /// Returns the number of levels (rows).
    #[must_use]
    pub fn n_levels(&self) -> usize {
        self.matrix.n_rows()
    }

    /// Expands observation level codes into design-matrix rows.
    ///
    /// Each code selects the contrast-matrix row for that level, producing
    /// one output row per observation.
    ///
    /// # Errors
    ///
    /// Returns an error if a code is not smaller than the number of levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrastar::contrast::{ContrastScheme, Treatment};
    ///
    /// let contrast = Treatment::new().code_without_intercept(&[1, 2, 3, 4]).unwrap();
    /// let design = contrast.expand(&[3, 0, 2]).unwrap();
    /// assert_eq!(design.shape(), (3, 3));
    /// assert!((design.get(0, 2) - 1.0).abs() < 1e-6); // level 4 indicator
    /// ```
    pub fn expand(&self, codes: &[usize]) -> Result<Matrix<f32>> {
        let n_levels = self.matrix.n_rows();
        let n_cols = self.matrix.n_cols();
        let mut data = Vec::with_capacity(codes.len() * n_cols);
        for &code in codes {
            if code >= n_levels {
                return Err(ContrastarError::CodeOutOfRange { code, n_levels });
            }
            data.extend_from_slice(self.matrix.row(code).as_slice());
        }
        Matrix::from_vec(codes.len(), n_cols, data).map_err(Into::into)
    }
}

/// The two-operation contract every coding scheme implements.
///
/// Both operations take an ordered, duplicate-free sequence of K >= 2 levels
/// and return a labeled [`ContrastMatrix`]. Implementations are pure:
/// identical levels produce identical output, with no shared state.
pub trait ContrastScheme {
    /// Builds the K x (K-1) contrast matrix for the given levels.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two levels are given, or if a level
    /// repeats.
    fn code_without_intercept<L: Display + PartialEq>(&self, levels: &[L])
        -> Result<ContrastMatrix>;

    /// Builds the K x K matrix: an all-ones intercept column followed by
    /// the contrast columns of [`Self::code_without_intercept`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::code_without_intercept`].
    fn code_with_intercept<L: Display + PartialEq>(&self, levels: &[L]) -> Result<ContrastMatrix> {
        Ok(self.code_without_intercept(levels)?.prepend_intercept())
    }
}

/// Maps observations to zero-based indices into the level sequence.
///
/// Generalizes the usual "category k maps to row k-1" indexing trick to
/// arbitrary level values.
///
/// # Errors
///
/// Returns an error if an observation is not one of the declared levels.
///
/// # Examples
///
/// ```
/// use contrastar::contrast::level_codes;
///
/// let codes = level_codes(&[1, 2, 3, 4], &[4, 4, 1, 3]).unwrap();
/// assert_eq!(codes, vec![3, 3, 0, 2]);
/// ```
pub fn level_codes<L: Display + PartialEq>(levels: &[L], observations: &[L]) -> Result<Vec<usize>> {
    observations
        .iter()
        .map(|obs| {
            levels
                .iter()
                .position(|level| level == obs)
                .ok_or_else(|| ContrastarError::UnknownLevel {
                    value: obs.to_string(),
                })
        })
        .collect()
}

/// Rejects level sequences no scheme can code: K < 2 or repeated values.
pub(crate) fn validate_levels<L: Display + PartialEq>(levels: &[L]) -> Result<()> {
    if levels.len() < 2 {
        return Err(ContrastarError::TooFewLevels {
            found: levels.len(),
        });
    }
    for (i, level) in levels.iter().enumerate() {
        if levels[..i].iter().any(|prev| prev == level) {
            return Err(ContrastarError::DuplicateLevel {
                level: level.to_string(),
            });
        }
    }
    Ok(())
}

/// Formats one `[<prefix><level>]` label per level.
pub(crate) fn name_levels<L: Display>(prefix: &str, levels: &[L]) -> Vec<String> {
    levels
        .iter()
        .map(|level| format!("[{prefix}{level}]"))
        .collect()
}


#[cfg(test)]
#[path = "tests_contrast_contract.rs"]
mod contract_tests;

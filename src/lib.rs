//! Contrastar: contrast coding for categorical variables in pure Rust.
//!
//! A categorical variable with K levels typically enters a regression as a
//! group of K-1 numeric columns. Contrastar builds those columns for the
//! standard coding schemes, each paired with human-readable column labels,
//! ready to be spliced into a linear-model design matrix.
//!
//! # Quick Start
//!
//! ```
//! use contrastar::prelude::*;
//!
//! // Four category levels (e.g. the four race groups of the UCLA hsb2 data)
//! let levels = [1, 2, 3, 4];
//!
//! // Simple coding: each level against the grand mean of level means
//! let contrast = Simple::new().code_without_intercept(&levels).unwrap();
//!
//! assert_eq!(contrast.matrix().shape(), (4, 3));
//! assert_eq!(contrast.labels(), ["[Simp.1]", "[Simp.2]", "[Simp.3]"]);
//! assert!((contrast.matrix().get(1, 0) - 0.75).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`contrast`]: Contrast matrices and coding schemes
//!   (Treatment, Simple, Sum, Diff, Helmert, Poly)
//! - [`error`]: Error types
//!
//! # Coding schemes
//!
//! Every scheme implements [`contrast::ContrastScheme`], the two-operation
//! contract the schemes share: `code_without_intercept` produces the
//! K x (K-1) contrast columns, `code_with_intercept` prepends an all-ones
//! intercept column. Schemes are pure: identical input levels always produce
//! identical output, and no call mutates shared state.

pub mod contrast;
pub mod error;
pub mod prelude;
pub mod primitives;

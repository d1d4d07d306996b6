//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contrastar::prelude::*;
//! ```

pub use crate::contrast::{
    level_codes, ContrastMatrix, ContrastScheme, Diff, Helmert, Poly, Simple, Sum, Treatment,
};
pub use crate::primitives::{Matrix, Vector};

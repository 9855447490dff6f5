// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bounded dense matrix arithmetic with Laplace-expansion determinants.
//!
//! This crate is the arithmetic engine behind the `mcalc` shell: a dense
//! `f64` matrix whose dimensions are validated into `[1, MAX_DIM]` at
//! construction, with elementwise addition, scalar multiplication,
//! transposition, matrix products, and determinants computed by recursive
//! cofactor expansion along the first row.
//!
//! ## Bounds
//!
//! The determinant visits `O(n!)` terms, so the crate refuses to construct
//! matrices larger than [`MAX_DIM`] per axis. Within that bound every
//! operation is total except where operand shapes are incompatible, which
//! surfaces as a [`MatrixError`] rather than a panic.
//!
//! ## Aliasing
//!
//! Operations borrow their operands and return freshly allocated results,
//! so an operand can be reused across any number of computations.

pub mod errors;
pub mod matrix;

mod determinant;

// Re-export commonly used types for convenience
pub use errors::{MatrixError, MatrixResult};
pub use matrix::{Matrix, MAX_DIM};

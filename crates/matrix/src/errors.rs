// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for matrix construction and arithmetic.

use thiserror::Error;

/// Errors reported by matrix construction and arithmetic.
///
/// Every operation checks its own dimension requirements up front and
/// refuses to compute on incompatible operands. Nothing is retried or
/// recovered here; the caller decides what to do with the diagnostic.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    #[error(
        "dimension mismatch for {op}: left operand is {lhs_rows}x{lhs_cols}, \
         right operand is {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Determinant requested on a non-square matrix
    #[error("determinant requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Dimensions outside the supported `[1, MAX_DIM]` range
    #[error("matrix dimensions must be between 1 and {max} per axis, got {rows}x{cols}")]
    DimensionOutOfBounds { rows: usize, cols: usize, max: usize },

    /// Rows of unequal length passed to construction
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Result type alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

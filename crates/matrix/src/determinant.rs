// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Determinant by Laplace cofactor expansion along the first row.

use crate::errors::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

impl Matrix {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// `1x1` and `2x2` matrices are closed-form base cases; anything larger
    /// recurses on its minors with alternating signs. The expansion visits
    /// `O(n!)` terms, which [`MAX_DIM`](crate::MAX_DIM) keeps bounded.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn determinant(&self) -> MatrixResult<f64> {
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let n = self.rows();
        if n == 1 {
            return Ok(self.get(0, 0));
        }
        if n == 2 {
            return Ok(self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0));
        }

        let mut det = 0.0;
        let mut sign = 1.0;
        for col in 0..n {
            det += sign * self.get(0, col) * self.minor(0, col)?.determinant()?;
            sign = -sign;
        }
        Ok(det)
    }

    /// Returns the minor at `(row, col)`: this matrix with that row and
    /// column removed, the remaining cells keeping their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOutOfBounds`] when a dimension of
    /// the result would leave `[1, MAX_DIM]`, as for a `1x1` source whose
    /// minor would be empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> MatrixResult<Self> {
        assert!(row < self.rows(), "row index out of bounds");
        assert!(col < self.cols(), "column index out of bounds");

        let data = self
            .data()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .map(|(_, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != col)
                    .map(|(_, &cell)| cell)
                    .collect()
            })
            .collect();

        Self::from_rows(data)
    }
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Bounded dense matrix type and its elementwise/product arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{MatrixError, MatrixResult};

/// Upper bound on rows and columns of a [`Matrix`].
///
/// The determinant runs in `O(n!)` by cofactor expansion; this bound keeps
/// its worst case at `10!` multiply-add terms.
pub const MAX_DIM: usize = 10;

/// A dense matrix of `f64` cells with both dimensions in `[1, MAX_DIM]`.
///
/// Dimensions are validated once at construction. Every arithmetic
/// operation reads its operands through shared references and returns a
/// freshly allocated result, so operands are never aliased or mutated.
///
/// # Example
///
/// ```
/// use mcalc_matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0), 3.0);
/// # Ok::<(), mcalc_matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

fn check_dims(rows: usize, cols: usize) -> MatrixResult<()> {
    if !(1..=MAX_DIM).contains(&rows) || !(1..=MAX_DIM).contains(&cols) {
        return Err(MatrixError::DimensionOutOfBounds {
            rows,
            cols,
            max: MAX_DIM,
        });
    }
    Ok(())
}

impl Matrix {
    /// Creates a matrix from row vectors, validating dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOutOfBounds`] if either dimension
    /// falls outside `[1, MAX_DIM]`, or [`MatrixError::RaggedRows`] if the
    /// rows have unequal lengths.
    pub fn from_rows(data: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        check_dims(rows, cols)?;

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Creates a zero matrix of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOutOfBounds`] if either dimension
    /// falls outside `[1, MAX_DIM]`.
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        check_dims(rows, cols)?;
        Ok(Self {
            data: vec![vec![0.0; cols]; rows],
            rows,
            cols,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns a reference to the underlying rows.
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Gets the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Sets the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Adds two matrices elementwise.
    ///
    /// Cells follow IEEE 754 addition, so NaN and infinities propagate.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch("addition", other));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies every cell by a scalar.
    ///
    /// `k` may be any `f64`, finite or not; cells follow IEEE 754
    /// multiplication.
    pub fn scalar_mul(&self, k: f64) -> Self {
        let data = self
            .data
            .iter()
            .map(|row| row.iter().map(|x| x * k).collect())
            .collect();

        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the transpose: shape `(cols, rows)` with `C[j][i] = A[i][j]`.
    pub fn transpose(&self) -> Self {
        let mut data = vec![vec![0.0; self.rows]; self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j][i] = self.data[i][j];
            }
        }

        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Computes the matrix product `self * other`.
    ///
    /// The result has shape `(self.rows, other.cols)`. The output is
    /// zero-initialized and each cell accumulates over `k` for fixed
    /// `(i, j)`, keeping the summation order stable so results are
    /// reproducible under floating point.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if
    /// `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> MatrixResult<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch("multiplication", other));
        }

        let mut data = vec![vec![0.0; other.cols]; self.rows];
        for i in 0..self.rows {
            for j in 0..other.cols {
                for k in 0..self.cols {
                    data[i][j] += self.data[i][k] * other.data[k][j];
                }
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    fn mismatch(&self, op: &'static str, other: &Self) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: other.rows,
            rhs_cols: other.cols,
        }
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.data
    }
}

impl fmt::Display for Matrix {
    /// Renders the grid with every cell as a fixed two-decimal field,
    /// right-aligned to width 8, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for cell in row {
                write!(f, " {:>8.2} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

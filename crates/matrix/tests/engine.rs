// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.
use anyhow::Result;
use mcalc_matrix::{Matrix, MatrixError, MAX_DIM};

#[test]
fn session_worth_of_operations_on_shared_operands() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;

    let sum = a.add(&b)?;
    assert_eq!(sum.data(), &[vec![6.0, 8.0], vec![10.0, 12.0]]);

    let product = a.matmul(&b)?;
    assert_eq!(product.data(), &[vec![19.0, 22.0], vec![43.0, 50.0]]);

    assert_eq!(a.determinant()?, -2.0);

    let flipped = a.transpose();
    assert_eq!(flipped.data(), &[vec![1.0, 3.0], vec![2.0, 4.0]]);

    let scaled = a.scalar_mul(2.5);
    assert_eq!(scaled.data(), &[vec![2.5, 5.0], vec![7.5, 10.0]]);

    // The same two operands fed every operation above.
    assert_eq!(a.data(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(b.data(), &[vec![5.0, 6.0], vec![7.0, 8.0]]);

    Ok(())
}

#[test]
fn failed_operations_leave_operands_usable() -> Result<()> {
    let wide = Matrix::zeros(2, 3)?;
    let tall = Matrix::zeros(3, 2)?;

    assert!(matches!(
        wide.add(&tall),
        Err(MatrixError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        wide.determinant(),
        Err(MatrixError::NotSquare { .. })
    ));

    let product = wide.matmul(&tall)?;
    assert_eq!(product.shape(), (2, 2));

    Ok(())
}

#[test]
fn results_feed_back_in_as_operands() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;

    let chained = a.add(&a)?.scalar_mul(0.5).transpose().transpose();
    assert_eq!(chained, a);

    let det_of_product = a.matmul(&a.transpose())?.determinant()?;
    // det(A * A^T) = det(A)^2 = 4
    assert_eq!(det_of_product, 4.0);

    Ok(())
}

#[test]
fn rendering_matches_fixed_width_grid() -> Result<()> {
    let m = Matrix::from_rows(vec![vec![-1.0, 250.5], vec![0.0, 42.0]])?;
    assert_eq!(
        m.to_string(),
        "    -1.00    250.50 \n     0.00     42.00 \n"
    );
    Ok(())
}

#[test]
fn max_dim_matrices_work_end_to_end() -> Result<()> {
    let ones = Matrix::from_rows(vec![vec![1.0; MAX_DIM]; MAX_DIM])?;

    let sum = ones.add(&ones)?;
    assert!(sum.data().iter().flatten().all(|&cell| cell == 2.0));

    let product = ones.matmul(&ones)?;
    assert!(product
        .data()
        .iter()
        .flatten()
        .all(|&cell| cell == MAX_DIM as f64));

    Ok(())
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Validated interactive input for dimensions, elements and scalars.

use anyhow::Result;
use dialoguer::Input;
use mcalc_matrix::{Matrix, MAX_DIM};

/// Prompts until the reply is an integer in `[1, MAX_DIM]`.
///
/// Unparseable input is rejected by dialoguer itself; the validator
/// extends that to the dimension bound, so the value handed back is
/// always safe to construct a matrix with.
pub fn prompt_dimension(label: &str) -> Result<usize> {
    let value = Input::<usize>::new()
        .with_prompt(label)
        .validate_with(|value: &usize| -> Result<(), String> {
            if (1..=MAX_DIM).contains(value) {
                Ok(())
            } else {
                Err(format!("must be between 1 and {}", MAX_DIM))
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Collects dimensions and elements for one named matrix.
///
/// Elements are prompted one at a time with 1-based `[row][column]`
/// labels and re-prompted until the reply parses as a number.
pub fn prompt_matrix(name: &str) -> Result<Matrix> {
    println!("\n Enter dimensions for {}:", name);
    let rows = prompt_dimension("Rows")?;
    let cols = prompt_dimension("Columns")?;

    println!("\n Enter elements for {} ({}x{}):", name, rows, cols);
    let mut matrix = Matrix::zeros(rows, cols)?;
    for i in 0..rows {
        for j in 0..cols {
            let cell = Input::<f64>::new()
                .with_prompt(format!("Element [{}][{}]", i + 1, j + 1))
                .interact_text()?;
            matrix.set(i, j, cell);
        }
    }

    Ok(matrix)
}

/// Prompts until the reply parses as a 64-bit float.
pub fn prompt_scalar(label: &str) -> Result<f64> {
    Ok(Input::<f64>::new().with_prompt(label).interact_text()?)
}

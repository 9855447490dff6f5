// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use tracing::info;

use crate::helpers::prompt;
use crate::helpers::render;

pub fn execute() -> Result<()> {
    println!("\n MATRIX TRANSPOSE");

    let a = prompt::prompt_matrix("Matrix A")?;
    let transposed = a.transpose();
    info!(
        rows = transposed.rows(),
        cols = transposed.cols(),
        "computed transpose"
    );

    render::print_matrix("Original Matrix A", &a);
    render::print_matrix("Transpose of A", &transposed);

    Ok(())
}

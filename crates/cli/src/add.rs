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
    println!("\n MATRIX ADDITION");

    let a = prompt::prompt_matrix("Matrix A")?;
    let b = prompt::prompt_matrix("Matrix B")?;

    match a.add(&b) {
        Ok(sum) => {
            info!(rows = sum.rows(), cols = sum.cols(), "computed matrix sum");
            render::print_matrix("Matrix A", &a);
            render::print_matrix("Matrix B", &b);
            render::print_matrix("Result (A + B)", &sum);
        }
        Err(err) => println!("\n Error: {}", err),
    }

    Ok(())
}

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
    println!("\n DETERMINANT CALCULATION");

    let a = prompt::prompt_matrix("Matrix A")?;

    match a.determinant() {
        Ok(det) => {
            info!(order = a.rows(), value = det, "computed determinant");
            render::print_matrix("Matrix A", &a);
            println!("\n Determinant of Matrix A: {:.4}", det);
        }
        Err(err) => println!("\n Error: {}", err),
    }

    Ok(())
}

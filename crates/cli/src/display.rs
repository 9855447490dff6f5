// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;

use crate::helpers::prompt;
use crate::helpers::render;

pub fn execute() -> Result<()> {
    println!("\n DISPLAY MATRIX");

    let matrix = prompt::prompt_matrix("Matrix")?;
    render::print_matrix("Your Matrix", &matrix);

    Ok(())
}

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
    println!("\n SCALAR MULTIPLICATION");

    let a = prompt::prompt_matrix("Matrix A")?;
    let scalar = prompt::prompt_scalar("Enter scalar value")?;

    let scaled = a.scalar_mul(scalar);
    info!(scalar, "computed scalar product");

    render::print_matrix("Original Matrix A", &a);
    println!("\nScalar: {:.2}", scalar);
    render::print_matrix("Result (scalar x A)", &scaled);

    Ok(())
}

// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use mcalc_matrix::Matrix;

/// Prints a labeled matrix with its shape, cells in the fixed
/// two-decimal grid format.
pub fn print_matrix(label: &str, matrix: &Matrix) {
    println!("\n{} ({}x{}):", label, matrix.rows(), matrix.cols());
    print!("{}", matrix);
}

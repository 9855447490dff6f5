// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use clap::Parser;
use cli::Cli;

mod add;
mod cli;
mod determinant;
mod display;
pub mod helpers;
mod menu;
mod multiply;
mod scalar;
mod transpose;

const BANNER: &str = r#"
  __  __   ___    _    _      ___
 |  \/  | / __|  /_\  | |    / __|
 | |\/| || (__  / _ \ | |__ | (__
 |_|  |_| \___|/_/ \_\|____| \___|
"#;

pub fn banner() {
    println!("{}", BANNER);
    println!(" Welcome to the Linear Algebra Calculator!");
}

fn main() {
    // Execute the cli
    if let Err(err) = Cli::parse().execute() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

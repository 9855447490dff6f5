// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{debug, instrument, Level};

use crate::helpers::telemetry::setup_tracing;
use crate::menu::{self, MenuChoice};
use crate::{add, banner, determinant, display, multiply, scalar, transpose};

#[derive(Parser, Debug)]
#[command(name = "mcalc")]
#[command(
    about = "An interactive calculator for small dense matrices",
    long_about = None
)]
pub struct Cli {
    /// Indicate error levels by adding additional `-v` arguments. Eg. `mcalc -vvv` will give you
    /// trace level output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    /// Runs the menu loop until the user selects Exit.
    ///
    /// Operation failures are reported inside the operation modules and
    /// never end the loop; only I/O errors propagate out of here.
    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_tracing(self.log_level());
        banner();

        loop {
            menu::print_menu();
            let choice = menu::prompt_choice()?;
            debug!("menu choice: {:?}", choice);

            match choice {
                MenuChoice::Add => add::execute()?,
                MenuChoice::Multiply => multiply::execute()?,
                MenuChoice::Determinant => determinant::execute()?,
                MenuChoice::Transpose => transpose::execute()?,
                MenuChoice::ScalarMultiply => scalar::execute()?,
                MenuChoice::Display => display::execute()?,
                MenuChoice::Exit => {
                    println!("\n Thank you!");
                    break;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        let quiet = Cli::try_parse_from(["mcalc", "--quiet"]).unwrap();
        assert_eq!(quiet.log_level(), Level::ERROR);

        let default = Cli::try_parse_from(["mcalc"]).unwrap();
        assert_eq!(default.log_level(), Level::WARN);

        let verbose = Cli::try_parse_from(["mcalc", "-v"]).unwrap();
        assert_eq!(verbose.log_level(), Level::INFO);

        let debug = Cli::try_parse_from(["mcalc", "-vv"]).unwrap();
        assert_eq!(debug.log_level(), Level::DEBUG);

        let trace = Cli::try_parse_from(["mcalc", "-vvvv"]).unwrap();
        assert_eq!(trace.log_level(), Level::TRACE);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mcalc", "-q", "-v"]).is_err());
    }
}

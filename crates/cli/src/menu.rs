// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The fixed menu of operations and its command-code mapping.

use anyhow::{bail, Result};
use dialoguer::Input;

const MENU: &str = "\
==============================================
           LINEAR ALGEBRA CALCULATOR
==============================================
1. Matrix Addition
2. Matrix Multiplication
3. Calculate Determinant
4. Transpose Matrix
5. Scalar Multiplication
6. Display Matrix
7. Exit";

/// Operations reachable from the interactive menu, keyed by the command
/// codes the menu displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Multiply,
    Determinant,
    Transpose,
    ScalarMultiply,
    Display,
    Exit,
}

impl TryFrom<u8> for MenuChoice {
    type Error = anyhow::Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => Self::Add,
            2 => Self::Multiply,
            3 => Self::Determinant,
            4 => Self::Transpose,
            5 => Self::ScalarMultiply,
            6 => Self::Display,
            7 => Self::Exit,
            _ => bail!("menu choice must be between 1 and 7, got {}", code),
        })
    }
}

pub fn print_menu() {
    println!("\n{}", MENU);
}

/// Prompts until the reply is a command code between 1 and 7.
///
/// Unparseable input and out-of-range codes are both rejected with a
/// fresh prompt, so the returned choice is always one of the menu items.
pub fn prompt_choice() -> Result<MenuChoice> {
    let code = Input::<u8>::new()
        .with_prompt("Select your operation")
        .validate_with(|code: &u8| -> Result<(), String> {
            if (1..=7).contains(code) {
                Ok(())
            } else {
                Err("please select a number between 1 and 7".to_string())
            }
        })
        .interact_text()?;

    MenuChoice::try_from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_menu_items() {
        assert_eq!(MenuChoice::try_from(1).unwrap(), MenuChoice::Add);
        assert_eq!(MenuChoice::try_from(2).unwrap(), MenuChoice::Multiply);
        assert_eq!(MenuChoice::try_from(3).unwrap(), MenuChoice::Determinant);
        assert_eq!(MenuChoice::try_from(4).unwrap(), MenuChoice::Transpose);
        assert_eq!(MenuChoice::try_from(5).unwrap(), MenuChoice::ScalarMultiply);
        assert_eq!(MenuChoice::try_from(6).unwrap(), MenuChoice::Display);
        assert_eq!(MenuChoice::try_from(7).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert!(MenuChoice::try_from(0).is_err());
        assert!(MenuChoice::try_from(8).is_err());
        assert!(MenuChoice::try_from(u8::MAX).is_err());
    }
}

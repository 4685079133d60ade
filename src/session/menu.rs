//! Main menu
//!
//! Menu text and parsing of the selected option.

use crate::error::SessionError;

/// Menu shown at the start of every loop iteration
pub const MENU_TEXT: &str = "=== Simple Auth Demo ===\n\
                             1) Sign Up\n\
                             2) Log In\n\
                             3) Exit\n\
                             Choose an option: ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    SignUp,
    LogIn,
    Exit,
}

/// Parses a raw menu line. The line is matched exactly, without trimming.
pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, SessionError> {
    match raw {
        "1" => Ok(MenuChoice::SignUp),
        "2" => Ok(MenuChoice::LogIn),
        "3" | "q" | "Q" => Ok(MenuChoice::Exit),
        _ => Err(SessionError::InvalidMenuChoice(raw.to_string())),
    }
}

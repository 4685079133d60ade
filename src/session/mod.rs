//! Interactive session
//!
//! Menu loop, console abstraction, and the Sign-Up/Log-In flows.

pub mod console;
pub mod core;
pub mod flows;
pub mod menu;

pub use console::{Console, StdConsole};
pub use self::core::{Session, SessionState};
pub use menu::{MenuChoice, parse_menu_choice};

//! Error handling
//!
//! Defines error types and handling for the auth demo.

pub mod handlers;
pub mod types;

pub use handlers::{handle_error, user_message};
pub use types::*;

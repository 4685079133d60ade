//! Error handlers
//!
//! Logs errors and maps them to the text shown to the user.

use crate::error::types::{AppError, AuthError, SessionError, StorageError};
use log::{error, info};

/// Log an error at a level matching its severity
pub fn handle_error(err: &AppError) {
    match err {
        AppError::Auth(_) | AppError::Session(SessionError::InvalidMenuChoice(_)) => {
            info!("{}", err)
        }
        AppError::Session(SessionError::InputClosed) => info!("{}", err),
        AppError::Storage(_) | AppError::Session(SessionError::Io(_)) => error!("{}", err),
    }
}

/// Convert error to the line printed on the console.
///
/// End of input and console I/O failures end the session instead of being
/// reported, so they have no message.
pub fn user_message(err: &AppError) -> Option<&'static str> {
    let message = match err {
        AppError::Auth(AuthError::EmptyUsername) => "Username cannot be empty.",
        AppError::Auth(AuthError::UsernameTaken(_)) => "Username already taken. Try another.",
        AppError::Auth(AuthError::PasswordMismatch) => "Passwords do not match.",
        AppError::Auth(AuthError::EmptyPassword) => "Password cannot be empty.",
        AppError::Auth(AuthError::UnknownUser(_)) => "No such user.",
        AppError::Auth(AuthError::InvalidPassword(_)) => "Invalid password.",
        AppError::Storage(StorageError::WriteFailed { .. }) => {
            "Failed to save user. Check file permissions."
        }
        AppError::Session(SessionError::InvalidMenuChoice(_)) => "Invalid option.",
        AppError::Session(SessionError::InputClosed | SessionError::Io(_)) => return None,
    };
    Some(message)
}

//! Error types
//!
//! Defines domain-specific error types for each module of the auth demo.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Authentication module errors
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    EmptyUsername,
    UsernameTaken(String),
    PasswordMismatch,
    EmptyPassword,
    UnknownUser(String),
    InvalidPassword(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyUsername => write!(f, "Empty username"),
            AuthError::UsernameTaken(u) => write!(f, "Username already taken: {}", u),
            AuthError::PasswordMismatch => write!(f, "Password confirmation mismatch"),
            AuthError::EmptyPassword => write!(f, "Empty password"),
            AuthError::UnknownUser(u) => write!(f, "User not found: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Invalid password for user: {}", u),
        }
    }
}

impl std::error::Error for AuthError {}

/// Credential store errors
#[derive(Debug)]
pub enum StorageError {
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::WriteFailed { path, source } => {
                write!(f, "Failed to append to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::WriteFailed { source, .. } => Some(source),
        }
    }
}

/// Interactive session errors
#[derive(Debug)]
pub enum SessionError {
    InvalidMenuChoice(String),
    /// Standard input reached end of file.
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidMenuChoice(c) => write!(f, "Invalid menu choice: {:?}", c),
            SessionError::InputClosed => write!(f, "Input stream closed"),
            SessionError::Io(e) => write!(f, "Console I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::Io(error)
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    Storage(StorageError),
    Session(SessionError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Session(e) => write!(f, "Session error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::Storage(error)
    }
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        AppError::Session(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Session(SessionError::Io(error))
    }
}

//! Authentication validator
//!
//! Implements the sign-up and log-in rules against a loaded credential snapshot.

use super::credentials::{CredentialStore, Credentials};
use super::hash::password_hash;
use crate::error::AuthError;

/// Checks a username offered at sign-up and returns it trimmed.
pub fn validate_new_username(users: &Credentials, raw: &str) -> Result<String, AuthError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(AuthError::EmptyUsername);
    }
    if CredentialStore::exists(users, username) {
        return Err(AuthError::UsernameTaken(username.to_string()));
    }
    Ok(username.to_string())
}

/// Checks a new password and its confirmation. Neither is trimmed.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password != confirmation {
        return Err(AuthError::PasswordMismatch);
    }
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    Ok(())
}

/// Validates that the given username exists in the snapshot.
pub fn validate_user(users: &Credentials, raw: &str) -> Result<String, AuthError> {
    let username = raw.trim();
    if CredentialStore::exists(users, username) {
        Ok(username.to_string())
    } else {
        Err(AuthError::UnknownUser(username.to_string()))
    }
}

/// Validates that the provided password hashes to the stored value for the username.
pub fn validate_password(
    users: &Credentials,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    match users.get(username) {
        Some(stored) if *stored == password_hash(password) => Ok(()),
        Some(_) => Err(AuthError::InvalidPassword(username.to_string())),
        None => Err(AuthError::UnknownUser(username.to_string())),
    }
}

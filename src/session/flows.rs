//! Sign-Up and Log-In flows
//!
//! Each flow loads a fresh snapshot of the store, prompts for what it needs
//! and reports the outcome. Domain failures are printed and end the flow;
//! only end of input and console I/O errors are returned to the caller.

use log::info;

use crate::auth::{
    CredentialStore, password_hash, validate_new_password, validate_new_username,
    validate_password, validate_user,
};
use crate::error::{AppError, SessionError, handle_error, user_message};
use crate::session::console::Console;

pub const SIGN_UP_SUCCESS: &str = "Sign-up successful! You can now log in.";

/// Registers a new user.
pub fn sign_up<C: Console>(console: &mut C, store: &CredentialStore) -> Result<(), SessionError> {
    match try_sign_up(console, store) {
        Ok(username) => {
            info!("User {} signed up", username);
            console.write_line(SIGN_UP_SUCCESS)?;
            Ok(())
        }
        Err(err) => report(console, err),
    }
}

/// Verifies a user's password.
pub fn log_in<C: Console>(console: &mut C, store: &CredentialStore) -> Result<(), SessionError> {
    match try_log_in(console, store) {
        Ok(username) => {
            info!("User {} logged in", username);
            console.write_line(&format!("Login successful! Welcome, {}.", username))?;
            Ok(())
        }
        Err(err) => report(console, err),
    }
}

fn try_sign_up<C: Console>(console: &mut C, store: &CredentialStore) -> Result<String, AppError> {
    let users = store.load();

    let raw = ask(console, "Choose a username: ")?;
    let username = validate_new_username(&users, &raw)?;

    let password = ask(console, "Choose a password: ")?;
    let confirmation = ask(console, "Confirm password: ")?;
    validate_new_password(&password, &confirmation)?;

    // Not atomic with the load above.
    store.append(&username, &password_hash(&password))?;
    Ok(username)
}

fn try_log_in<C: Console>(console: &mut C, store: &CredentialStore) -> Result<String, AppError> {
    let users = store.load();

    let raw = ask(console, "Username: ")?;
    let username = validate_user(&users, &raw)?;

    let password = ask(console, "Password: ")?;
    validate_password(&users, &username, &password)?;
    Ok(username)
}

fn ask<C: Console>(console: &mut C, text: &str) -> Result<String, SessionError> {
    console.prompt(text)?.ok_or(SessionError::InputClosed)
}

fn report<C: Console>(console: &mut C, err: AppError) -> Result<(), SessionError> {
    match err {
        AppError::Session(e @ (SessionError::InputClosed | SessionError::Io(_))) => Err(e),
        other => {
            handle_error(&other);
            if let Some(message) = user_message(&other) {
                console.write_line(message)?;
            }
            Ok(())
        }
    }
}

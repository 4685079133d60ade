//! Authentication system
//!
//! Handles credential persistence, password hashing, and sign-up/log-in validation.

pub mod credentials;
pub mod hash;
pub mod validator;

pub use credentials::{CredentialStore, Credentials, UserRecord};
pub use hash::password_hash;
pub use validator::{validate_new_password, validate_new_username, validate_password, validate_user};

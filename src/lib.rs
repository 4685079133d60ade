pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use self::config::AppConfig;
pub use session::Session;

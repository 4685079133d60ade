//! Logging setup
//!
//! Diagnostics go to stderr through `env_logger`, leaving stdout to the
//! interactive dialogue. `RUST_LOG` overrides the default `error` level.

use env_logger::Env;

/// Setup logging for the process
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("error")).init();
}

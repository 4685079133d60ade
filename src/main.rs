//! Simple Auth Demo - Entry Point
//!
//! Interactive sign-up/log-in against a flat credential file.

use log::{error, info};
use std::process::ExitCode;

use simple_auth::config::AppConfig;
use simple_auth::logging::setup_logging;
use simple_auth::session::{Session, StdConsole};

fn main() -> ExitCode {
    setup_logging();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using credential store {}", config.store_path().display());

    let mut session = Session::from_config(&config, StdConsole::stdio());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Session loop
//!
//! Drives the menu state machine and dispatches to the Sign-Up and Log-In
//! flows until the user exits or input runs out.

use log::{error, info};

use crate::auth::CredentialStore;
use crate::config::AppConfig;
use crate::error::{AppError, SessionError, handle_error, user_message};
use crate::session::console::Console;
use crate::session::flows;
use crate::session::menu::{MENU_TEXT, MenuChoice, parse_menu_choice};

/// States of the menu loop. `Exit` is terminal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    Menu,
    SignUp,
    LogIn,
    Exit,
}

/// Interactive menu loop over a credential store
pub struct Session<C> {
    store: CredentialStore,
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(store: CredentialStore, console: C) -> Self {
        Self { store, console }
    }

    pub fn from_config(config: &AppConfig, console: C) -> Self {
        Self::new(CredentialStore::new(config.store_path()), console)
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs until the user exits or input runs out.
    ///
    /// End of input ends the session with `Ok`; console I/O failures are returned.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started, store {}", self.store.path().display());

        let mut state = SessionState::Menu;
        while state != SessionState::Exit {
            state = match self.step(state) {
                Ok(next) => next,
                Err(SessionError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => {
                    error!("Session aborted: {}", e);
                    return Err(e);
                }
            };
        }

        info!("Session ended by user");
        Ok(())
    }

    /// Performs one transition of the state machine.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        match state {
            SessionState::Menu => self.show_menu(),
            SessionState::SignUp => {
                flows::sign_up(&mut self.console, &self.store)?;
                self.console.write("\n")?;
                Ok(SessionState::Menu)
            }
            SessionState::LogIn => {
                flows::log_in(&mut self.console, &self.store)?;
                self.console.write("\n")?;
                Ok(SessionState::Menu)
            }
            SessionState::Exit => Ok(SessionState::Exit),
        }
    }

    fn show_menu(&mut self) -> Result<SessionState, SessionError> {
        let raw = self
            .console
            .prompt(MENU_TEXT)?
            .ok_or(SessionError::InputClosed)?;

        match parse_menu_choice(&raw) {
            Ok(MenuChoice::SignUp) => Ok(SessionState::SignUp),
            Ok(MenuChoice::LogIn) => Ok(SessionState::LogIn),
            Ok(MenuChoice::Exit) => {
                self.console.write_line("Bye!")?;
                Ok(SessionState::Exit)
            }
            Err(e) => {
                let err = AppError::from(e);
                handle_error(&err);
                if let Some(message) = user_message(&err) {
                    self.console.write_line(message)?;
                }
                self.console.write("\n")?;
                Ok(SessionState::Menu)
            }
        }
    }
}

//! Full-screen sign-in screen for Ember.
//!
//! Elm-style split: `state` + `events` go through the pure reducer in
//! `update`, which returns `effects` for the `runtime` to execute.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod widgets;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
use ember_core::auth::AuthClient;
use ember_core::config::Config;
pub use runtime::TuiRuntime;
pub use state::{AppState, LoginOutcome};
use tracing::info;

/// Options for a sign-in session.
#[derive(Debug, Clone, Default)]
pub struct SignInOptions {
    /// Value to pre-fill in the email field.
    pub email: Option<String>,
}

/// Runs the sign-in screen until the user signs in or quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal or terminal I/O fails.
pub async fn run_sign_in(
    config: &Config,
    client: Arc<dyn AuthClient>,
    options: SignInOptions,
) -> Result<LoginOutcome> {
    // The sign-in screen requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("Sign-in requires a terminal.");
    }

    let mut state = AppState::new(config);
    if let Some(email) = options.email {
        state = state.with_email(email);
    }

    let mut runtime = TuiRuntime::new(state, client)?;
    let outcome = runtime.run()?;
    info!(?outcome, "Sign-in screen closed");

    Ok(outcome)
}

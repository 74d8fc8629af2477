//! Sign-in command handler.

use std::sync::Arc;

use anyhow::Result;
use ember_core::auth::{AuthClient, HttpAuthClient};
use ember_core::config::{Config, paths};
use ember_core::logging;
use ember_tui::{LoginOutcome, SignInOptions};
use tracing::info;

pub async fn run(config: &Config, email: Option<String>) -> Result<()> {
    // Logs are diagnostics only; a read-only home must not block sign-in.
    let _log_guard = match logging::init(&config.logging, &paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: diagnostic logging disabled: {e:#}");
            None
        }
    };

    let client = HttpAuthClient::new(&config.auth)?;
    info!(url = %client.login_url(), "Opening sign-in screen");
    let client: Arc<dyn AuthClient> = Arc::new(client);

    let outcome = ember_tui::run_sign_in(config, client, SignInOptions { email }).await?;

    match outcome {
        LoginOutcome::SignedIn { email } => println!("Signed in as {email}"),
        LoginOutcome::Cancelled => println!("Sign-in cancelled."),
    }

    Ok(())
}

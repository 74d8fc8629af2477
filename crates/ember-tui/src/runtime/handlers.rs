//! Sign-in effect handler.
//!
//! `spawn_login` runs the collaborator call on a tokio task and reports the
//! result through the inbox. A `LoginGuard` travels with the task so the form
//! always leaves the loading state, even if the task panics or is dropped
//! before it finishes.

use std::sync::Arc;

use ember_core::auth::AuthClient;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::inbox::UiEventSender;
use crate::events::{FormEvent, UiEvent};

/// Reason reported when the login task ends without a result.
pub const ABANDONED_REASON: &str = "sign-in task ended without a result";

/// Reports a `LoginFailed` on drop unless `complete` was called.
pub struct LoginGuard {
    inbox: Option<UiEventSender>,
}

impl LoginGuard {
    pub fn new(inbox: UiEventSender) -> Self {
        Self { inbox: Some(inbox) }
    }

    /// Sends the final result and disarms the guard.
    pub fn complete(mut self, event: FormEvent) {
        if let Some(inbox) = self.inbox.take() {
            let _ = inbox.send(UiEvent::Form(event));
        }
    }
}

impl Drop for LoginGuard {
    fn drop(&mut self) {
        if let Some(inbox) = self.inbox.take() {
            warn!("Sign-in task ended without reporting a result");
            let _ = inbox.send(UiEvent::Form(FormEvent::LoginFailed {
                reason: ABANDONED_REASON.to_string(),
            }));
        }
    }
}

/// Spawns the sign-in call. The guard is armed before spawning so even a task
/// that never gets polled resets the form.
pub fn spawn_login(
    client: &Arc<dyn AuthClient>,
    inbox: &UiEventSender,
    email: String,
    password: String,
) -> JoinHandle<()> {
    let guard = LoginGuard::new(inbox.clone());
    tokio::spawn(run_login(Arc::clone(client), email, password, guard))
}

async fn run_login(
    client: Arc<dyn AuthClient>,
    email: String,
    password: String,
    guard: LoginGuard,
) {
    let event = match client.login(&email, &password).await {
        Ok(()) => {
            info!(%email, "Sign-in succeeded");
            FormEvent::LoginSucceeded
        }
        Err(err) => {
            // The screen shows a fixed message; keep the real cause here.
            warn!(%email, error = %err, "Sign-in failed");
            FormEvent::LoginFailed {
                reason: err.to_string(),
            }
        }
    };
    guard.complete(event);
}

//! Sign-in screen state.
//!
//! ```text
//! AppState
//! ├── form: FormState        (email, password, loading, error, focus)
//! ├── spinner_frame          (advanced on Tick while signing in)
//! ├── signed_in_as           (set once the collaborator accepts)
//! └── exit_on_success / should_quit
//! ```
//!
//! `FormState` is mutated only by the reducer in `update.rs`.

use std::fmt;

use ember_core::config::Config;
use thiserror::Error;

/// Which control receives remote/keyboard input.
///
/// `None` means no text field is focused; the sign-in button is the active
/// control in that state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    Email,
    Password,
}

impl Focus {
    /// Next control when moving down the form. Does not wrap.
    pub fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password | Focus::None => Focus::None,
        }
    }

    /// Previous control when moving up the form. Does not wrap.
    pub fn prev(self) -> Self {
        match self {
            Focus::None => Focus::Password,
            Focus::Password | Focus::Email => Focus::Email,
        }
    }
}

/// User-facing form errors. The text is fixed; failure details go to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both email and password.")]
    Validation,
    #[error("Sign-in failed. Please check your email and password.")]
    Authentication,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub focused_field: Focus,
}

impl FormState {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// The sign-in control is disabled while a request is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        !self.is_loading
    }

    /// Text inputs are disabled while a request is in flight.
    pub fn is_input_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn set_error(&mut self, error: FormError) {
        self.error_message = Some(error.to_string());
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_loading", &self.is_loading)
            .field("error_message", &self.error_message)
            .field("focused_field", &self.focused_field)
            .finish()
    }
}

/// How the sign-in screen ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn { email: String },
    Cancelled,
}

/// Combined state for the sign-in screen.
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormState,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Email accepted by the collaborator, if any.
    pub signed_in_as: Option<String>,
    /// Close the screen after a successful sign-in.
    pub exit_on_success: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            exit_on_success: config.ui.exit_on_success,
            ..Self::default()
        }
    }

    /// Pre-fills the email field.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.form = FormState::with_email(email);
        self
    }

    pub fn outcome(&self) -> LoginOutcome {
        match &self.signed_in_as {
            Some(email) => LoginOutcome::SignedIn {
                email: email.clone(),
            },
            None => LoginOutcome::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moves_down_without_wrapping() {
        assert_eq!(Focus::Email.next(), Focus::Password);
        assert_eq!(Focus::Password.next(), Focus::None);
        assert_eq!(Focus::None.next(), Focus::None);
    }

    #[test]
    fn test_focus_moves_up_without_wrapping() {
        assert_eq!(Focus::None.prev(), Focus::Password);
        assert_eq!(Focus::Password.prev(), Focus::Email);
        assert_eq!(Focus::Email.prev(), Focus::Email);
    }

    #[test]
    fn test_form_debug_redacts_password() {
        let form = FormState {
            email: "viewer@ember.tv".to_string(),
            password: "hunter2".to_string(),
            ..FormState::default()
        };
        let debug = format!("{form:?}");
        assert!(debug.contains("viewer@ember.tv"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_outcome_reflects_sign_in() {
        let mut app = AppState::new(&Config::default());
        assert!(app.exit_on_success);
        assert_eq!(app.outcome(), LoginOutcome::Cancelled);

        app.signed_in_as = Some("viewer@ember.tv".to_string());
        assert_eq!(
            app.outcome(),
            LoginOutcome::SignedIn {
                email: "viewer@ember.tv".to_string()
            }
        );
    }
}

//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs I/O
//! or spawns tasks directly.

use std::fmt;

/// Effects returned by the reducer for the runtime to execute.
pub enum UiEffect {
    /// Close the sign-in screen.
    Quit,

    /// Call the auth collaborator with the submitted credentials.
    SpawnLogin { email: String, password: String },
}

impl fmt::Debug for UiEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEffect::Quit => f.write_str("Quit"),
            UiEffect::SpawnLogin { email, .. } => f
                .debug_struct("SpawnLogin")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! ticks, and results of async work sent back through the runtime inbox.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The screen became visible.
    Appear,
    /// Animation/render cadence.
    Tick,
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
    /// Form-level event.
    Form(FormEvent),
}

/// Events understood by the form reducer.
///
/// Edit events carry the full new value of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    EditEmail(String),
    EditPassword(String),
    Submit,
    FocusEmail,
    FocusPassword,
    ClearFocus,
    LoginSucceeded,
    /// `reason` is diagnostic only and never shown to the user.
    LoginFailed { reason: String },
}

impl From<FormEvent> for UiEvent {
    fn from(event: FormEvent) -> Self {
        UiEvent::Form(event)
    }
}

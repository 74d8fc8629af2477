//! Sign-in reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{FormEvent, UiEvent};
use crate::state::{AppState, Focus, FormError, FormState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Appear => reduce_form(app, FormEvent::FocusEmail),
        UiEvent::Tick => {
            if app.form.is_loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Form(form_event) => reduce_form(app, form_event),
    }
}

/// Applies a form event.
pub fn reduce_form(app: &mut AppState, event: FormEvent) -> Vec<UiEffect> {
    let form = &mut app.form;
    match event {
        FormEvent::EditEmail(value) => {
            if form.is_input_enabled() {
                form.email = value;
                form.error_message = None;
            }
            vec![]
        }
        FormEvent::EditPassword(value) => {
            if form.is_input_enabled() {
                form.password = value;
                form.error_message = None;
            }
            vec![]
        }
        FormEvent::Submit => submit(form),
        FormEvent::FocusEmail => {
            form.focused_field = Focus::Email;
            vec![]
        }
        FormEvent::FocusPassword => {
            form.focused_field = Focus::Password;
            vec![]
        }
        FormEvent::ClearFocus => {
            form.focused_field = Focus::None;
            vec![]
        }
        FormEvent::LoginSucceeded => {
            form.is_loading = false;
            form.error_message = None;
            app.signed_in_as = Some(form.email.clone());
            if app.exit_on_success {
                vec![UiEffect::Quit]
            } else {
                vec![]
            }
        }
        FormEvent::LoginFailed { .. } => {
            form.is_loading = false;
            form.set_error(FormError::Authentication);
            vec![]
        }
    }
}

/// Validates the form and starts a sign-in request.
///
/// Ignored while a request is already in flight, so at most one login call
/// is outstanding.
fn submit(form: &mut FormState) -> Vec<UiEffect> {
    if !form.is_submit_enabled() {
        return vec![];
    }

    if form.email.is_empty() || form.password.is_empty() {
        form.set_error(FormError::Validation);
        return vec![];
    }

    form.is_loading = true;
    form.error_message = None;
    vec![UiEffect::SpawnLogin {
        email: form.email.clone(),
        password: form.password.clone(),
    }]
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => match paste_event(&app.form, &text) {
            Some(form_event) => reduce_form(app, form_event),
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        _ => match key_to_form_event(&app.form, key) {
            Some(form_event) => reduce_form(app, form_event),
            None => vec![],
        },
    }
}

/// Maps a key press to a form event, remote-control style.
///
/// Enter on a text field advances focus (email -> password -> button);
/// Enter on the button submits.
pub fn key_to_form_event(form: &FormState, key: KeyEvent) -> Option<FormEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => Some(match form.focused_field {
            Focus::Email => FormEvent::FocusPassword,
            Focus::Password => FormEvent::ClearFocus,
            Focus::None => FormEvent::Submit,
        }),
        KeyCode::Down | KeyCode::Tab => Some(focus_event(form.focused_field.next())),
        KeyCode::Up | KeyCode::BackTab => Some(focus_event(form.focused_field.prev())),
        KeyCode::Backspace => edit_focused(form, |value| {
            value.pop();
        }),
        KeyCode::Char('u') if ctrl => edit_focused(form, String::clear),
        KeyCode::Char(c) if !ctrl && !alt => edit_focused(form, |value| value.push(c)),
        _ => None,
    }
}

fn paste_event(form: &FormState, text: &str) -> Option<FormEvent> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    if cleaned.is_empty() {
        return None;
    }
    edit_focused(form, |value| value.push_str(&cleaned))
}

fn focus_event(focus: Focus) -> FormEvent {
    match focus {
        Focus::Email => FormEvent::FocusEmail,
        Focus::Password => FormEvent::FocusPassword,
        Focus::None => FormEvent::ClearFocus,
    }
}

/// Builds the edit event for the focused field, or `None` when no field has focus.
fn edit_focused(form: &FormState, edit: impl FnOnce(&mut String)) -> Option<FormEvent> {
    match form.focused_field {
        Focus::Email => {
            let mut value = form.email.clone();
            edit(&mut value);
            Some(FormEvent::EditEmail(value))
        }
        Focus::Password => {
            let mut value = form.password.clone();
            edit(&mut value);
            Some(FormEvent::EditPassword(value))
        }
        Focus::None => None,
    }
}

//! Terminal ownership for the sign-in screen.
//!
//! Raw mode, the alternate screen and bracketed paste belong to the thread
//! that called [`enter`] (the UI thread). The panic hook hands the terminal
//! back only when that thread panics. A login call panicking on a tokio
//! worker is caught by tokio and reported through the inbox, so the screen
//! stays up and the form can be retried.

use std::io::{self, Stdout};
use std::panic;
use std::sync::{Mutex, Once, PoisonError};
use std::thread::{self, ThreadId};

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type ScreenTerminal = Terminal<CrosstermBackend<Stdout>>;

static UI_THREAD: Mutex<Option<ThreadId>> = Mutex::new(None);
static PANIC_HOOK: Once = Once::new();

fn set_ui_thread(owner: Option<ThreadId>) {
    *UI_THREAD.lock().unwrap_or_else(PoisonError::into_inner) = owner;
}

/// Marks the calling thread as the owner of the terminal.
pub fn claim_for_current_thread() {
    set_ui_thread(Some(thread::current().id()));
}

/// Whether the calling thread owns the terminal.
pub fn is_ui_thread() -> bool {
    *UI_THREAD.lock().unwrap_or_else(PoisonError::into_inner) == Some(thread::current().id())
}

/// Takes over the terminal for the calling thread: raw mode, alternate screen
/// and bracketed paste (pasted credentials arrive as one event).
///
/// On failure everything already switched on is switched back off.
///
/// # Errors
/// Returns an error if the terminal cannot be configured.
pub fn enter() -> Result<ScreenTerminal> {
    install_panic_hook();
    claim_for_current_thread();

    let entered = enter_screen().and_then(|()| {
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")
    });
    if entered.is_err() {
        let _ = leave();
    }
    entered
}

fn enter_screen() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter the sign-in screen")?;
    Ok(())
}

/// Hands the terminal back to the shell. Safe to call more than once.
///
/// # Errors
/// Returns an error if the terminal cannot be restored.
pub fn leave() -> Result<()> {
    set_ui_thread(None);

    let mut stdout = io::stdout();
    // Paste mode must be off before raw mode goes.
    let _ = execute!(stdout, DisableBracketedPaste, Show);
    execute!(stdout, LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs the process panic hook once. A panic on the UI thread restores
/// the terminal before the message prints; panics elsewhere pass through.
pub fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_ui_thread() {
                let _ = leave();
            }
            previous(info);
        }));
    });
}

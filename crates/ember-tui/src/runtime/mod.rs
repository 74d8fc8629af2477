//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: Core runtime (`TuiRuntime`, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Sign-in effect handler

mod handlers;
mod inbox;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ember_core::auth::AuthClient;
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, LoginOutcome};
use crate::terminal::{self, ScreenTerminal};
use crate::{render, update};

/// Tick cadence while a sign-in request is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen sign-in runtime.
///
/// Owns the terminal and state. The terminal is handed back on drop, or by
/// the panic hook if the UI thread panics.
pub struct TuiRuntime {
    terminal: ScreenTerminal,
    pub state: AppState,
    /// Collaborator used for `SpawnLogin` effects.
    client: Arc<dyn AuthClient>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal. The calling thread
    /// becomes the UI thread.
    ///
    /// Must be called within a tokio runtime; login calls are spawned on it
    /// and run on its workers.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: AppState, client: Arc<dyn AuthClient>) -> Result<Self> {
        let terminal = terminal::enter().context("Failed to set up terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits or sign-in completes.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<LoginOutcome> {
        self.event_loop()?;
        Ok(self.state.outcome())
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        self.dispatch_event(UiEvent::Appear);

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick cadence
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal, then a Tick when due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.form.is_loading {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick only if nothing is pending.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SpawnLogin { email, password } => {
                debug!(%email, "Starting sign-in");
                // Detached: LoginGuard reports the result through the inbox.
                drop(handlers::spawn_login(
                    &self.client,
                    &self.inbox_tx,
                    email,
                    password,
                ));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::leave();
    }
}

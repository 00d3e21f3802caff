//! TUI runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → handle events → tick the debouncer → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use eyre::Result;
use log::info;
use std::time::Instant;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, app: App, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Tick => {
                    // Debounced search recomputation happens on ticks
                    self.app.tick(Instant::now());
                }
                Event::Resize(_, _) => {
                    // Terminal handles resize on next draw
                }
            }

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}

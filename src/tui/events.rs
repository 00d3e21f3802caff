//! Event handling for the TUI.
//!
//! Provides the unified `Event` type (keyboard, tick, resize) and an async
//! `EventHandler` that polls crossterm with a tick interval. Ticks drive
//! the search debounce check.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Periodic tick
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Polls crossterm events, emitting a tick when the interval elapses
/// without input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next event.
    ///
    /// Key release events and unhandled event kinds are reported as ticks
    /// so the caller sees a steady cadence.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        // Crossterm polling is blocking; keep it off the async runtime.
        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                match event::read()? {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                    CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                    _ => Ok(Event::Tick),
                }
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(100)
    }
}

//! Event polling
//!
//! Turns crossterm's event stream into the few events the quiz loop cares
//! about, producing a tick whenever nothing happens within the tick rate.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events the event loop handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Key press (releases and repeats are filtered out)
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// No input within the tick rate
    Tick,
}

impl TuiEvent {
    /// Keep presses only; some platforms also report key releases
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => TuiEvent::Key(key),
            CrosstermEvent::Resize(w, h) => TuiEvent::Resize(w, h),
            _ => TuiEvent::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            Ok(TuiEvent::from_crossterm(event::read()?))
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

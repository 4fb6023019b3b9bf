//! Dispatch middleware
//!
//! Middleware sits between `Store::dispatch` and the reducer. Each one sees
//! the action together with the state it is about to be applied to, and
//! hands an action on to the next stage. There is no way to swallow an
//! action: the chain always ends in the reducer.

use crate::actions::Action;
use crate::state::AppState;

/// A dispatch-chain interceptor
pub trait Middleware: Send {
    /// Observe (or rewrite) `action` before it reaches the reducer
    fn process(&mut self, action: Action, state: &AppState) -> Action;
}

impl<F> Middleware for F
where
    F: FnMut(Action, &AppState) -> Action + Send,
{
    fn process(&mut self, action: Action, state: &AppState) -> Action {
        self(action, state)
    }
}

/// Emits one `tracing` event per dispatched action and forwards it untouched
#[derive(Debug, Default)]
pub struct LoggingMiddleware {
    sequence: u64,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions seen so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl Middleware for LoggingMiddleware {
    fn process(&mut self, action: Action, state: &AppState) -> Action {
        self.sequence += 1;

        let payload =
            serde_json::to_string(&action).unwrap_or_else(|_| action.name().to_string());

        tracing::info!(
            target: "quizflow::dispatch",
            seq = self.sequence,
            action = action.name(),
            payload = %payload,
            index = state.current_index(),
            answered = state.answered_count(),
            "{}",
            action
        );

        action
    }
}

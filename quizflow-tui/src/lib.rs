//! quizflow-tui library
//!
//! Exports the view binding, keymap and rendering so they can be tested
//! without a real terminal.

pub mod app;
pub mod binder;
pub mod cli;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{QuizApp, Session, TuiEvent};
pub use binder::{ViewBinder, ViewModel};
pub use error::{Result, TuiError};

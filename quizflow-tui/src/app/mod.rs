//! Application module
//!
//! Front-end plumbing around the quiz store:
//! - Event: terminal events, polled with a tick
//! - Intent: what a key press means on the current screen
//! - Session: overlay and quit flags local to the terminal UI
//! - Runner: the store, binder and editor wired into one loop

pub mod event;
pub mod intent;
pub mod runner;
pub mod session;

pub use event::{EventHandler, TuiEvent};
pub use intent::{map_key, Intent};
pub use runner::QuizApp;
pub use session::{Session, UiIntent};

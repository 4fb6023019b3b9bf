//! Quizflow - a quiz driven by a unidirectional data-flow store
//!
//! Actions describe user intents, a pure reducer turns the current state and
//! an action into the next state, and the store runs middleware, applies the
//! reducer and notifies subscribers.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod reducer;
pub mod shuffle;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use actions::Action;
pub use catalog::{Catalog, Question};
pub use config::Config;
pub use error::{CatalogError, ConfigError, QuizError, Result};
pub use middleware::{LoggingMiddleware, Middleware};
pub use reducer::{apply, reduce};
pub use state::{AnswerCountPolicy, AppState, QuizSetup, SubmissionReport};
pub use store::{SharedStore, Store, Subscriber, SubscriptionId};

//! Error types for quizflow-tui
//!
//! Wraps state-container errors and terminal/IO errors for unified error
//! handling in the binary.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration, catalog or logging setup failed
    #[error("Quiz error: {0}")]
    Quiz(#[from] libquizflow::QuizError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Submission report could not be serialized
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Quiz(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Report(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

//! Error types for Quizflow
//!
//! The reducer and store are total and never fail. Errors only come from the
//! edges: reading configuration, building the question catalog and
//! installing the log subscriber.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl QuizError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizError::Config(_) => 2,
            QuizError::Catalog(_) => 2,
            QuizError::Logging(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Question catalog is empty")]
    Empty,

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),

    #[error("Question order is not a permutation of the catalog ids")]
    NotAPermutation,
}

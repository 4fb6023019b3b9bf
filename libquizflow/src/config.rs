//! Configuration management for Quizflow

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{builtin_questions, Catalog, Question};
use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;
use crate::state::{AnswerCountPolicy, QuizSetup, DEFAULT_STUDENT_ID};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub student_id: String,
    pub answer_count: AnswerCountPolicy,
    pub questions: Vec<Question>,
    pub ui: UiConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    pub colors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file; `None` picks a file under the state/data directory
    pub file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            student_id: DEFAULT_STUDENT_ID.to_string(),
            answer_count: AnswerCountPolicy::default(),
            questions: builtin_questions(),
            ui: UiConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// `QUIZFLOW_CONFIG` must point at an existing file. Without it, a missing
    /// file at the XDG location falls back to the built-in defaults.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var("QUIZFLOW_CONFIG").is_ok();
        let config_path = resolve_config_path()?;

        let config = if !explicit && !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default()
        } else {
            Self::load_from_path(&config_path)?
        };

        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), questions = config.questions.len(), "Loaded config");
        Ok(config)
    }

    /// Apply `QUIZFLOW_TICK_MS`, `NO_COLOR`/`QUIZFLOW_NO_COLOR` and the
    /// `QUIZFLOW_LOG_*` variables on top of the file values
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(tick) = std::env::var("QUIZFLOW_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|tick: &u64| *tick > 0)
        {
            self.ui.tick_rate_ms = tick;
        }

        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("QUIZFLOW_NO_COLOR").is_some()
        {
            self.ui.colors = false;
        }

        if let Some(format) = std::env::var("QUIZFLOW_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.logging.format = format;
        }

        if let Ok(level) = std::env::var("QUIZFLOW_LOG_LEVEL") {
            self.logging.level = level;
        }

        self
    }

    /// Check the values serde cannot: catalog shape and positive tick rate
    pub fn validate(&self) -> Result<()> {
        if self.student_id.trim().is_empty() {
            return Err(ConfigError::MissingField("student_id".to_string()).into());
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.tick_rate_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Catalog::new(self.questions.clone())?;
        Ok(())
    }

    /// Build the quiz setup the store starts from
    pub fn quiz_setup(&self) -> Result<QuizSetup> {
        let catalog = Catalog::new(self.questions.clone())?;

        Ok(QuizSetup {
            student_id: self.student_id.clone(),
            catalog: Arc::new(catalog),
            policy: self.answer_count,
        })
    }

    /// Resolved log file location (tilde-expanded)
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(file) => Ok(PathBuf::from(shellexpand::tilde(file).to_string())),
            None => Ok(resolve_state_path()?.join("quizflow.log")),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("QUIZFLOW_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("quizflow").join("config.toml"))
}

/// Resolve the directory for logs, preferring the XDG state directory
pub fn resolve_state_path() -> Result<PathBuf> {
    let dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .ok_or_else(|| ConfigError::MissingField("state directory".to_string()))?;

    Ok(dir.join("quizflow"))
}

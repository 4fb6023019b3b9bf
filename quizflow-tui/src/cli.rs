//! Command line interface

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use libquizflow::logging::{LogFormat, LogTarget, LoggingConfig};
use libquizflow::{AnswerCountPolicy, Config, Result};

#[derive(Parser, Debug)]
#[command(name = "quizflow")]
#[command(version)]
#[command(about = "Answer a shuffled quiz in the terminal", long_about = None)]
pub struct Cli {
    /// Config file (defaults to $QUIZFLOW_CONFIG or ~/.config/quizflow/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Student id recorded in the submission report
    #[arg(long, env = "QUIZFLOW_STUDENT_ID")]
    pub student_id: Option<String>,

    /// Decrement the answered count on every cleared answer, even unanswered ones
    #[arg(long)]
    pub legacy_count: bool,

    /// Format of the report printed after submitting
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log file, or "-" for stderr
    #[arg(long)]
    pub log_file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    /// Load the config file and layer the command line on top of it
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from_path(path)?.with_env_overrides(),
            None => Config::load()?,
        };

        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(student_id) = &self.student_id {
            config.student_id = student_id.clone();
        }
        if self.legacy_count {
            config.answer_count = AnswerCountPolicy::Legacy;
        }
        config
    }

    pub fn logging(&self, config: &Config) -> Result<LoggingConfig> {
        let target = match self.log_file.as_deref() {
            Some("-") => LogTarget::Stderr,
            Some(path) => LogTarget::File(PathBuf::from(path)),
            None => LogTarget::File(config.log_file()?),
        };

        let format: LogFormat = config.logging.format;
        Ok(LoggingConfig::new(format, config.logging.level.clone(), self.verbose).with_target(target))
    }
}

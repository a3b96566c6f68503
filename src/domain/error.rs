use std::io;

use thiserror::Error;

/// Library-wide error type for holmes operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No configuration file at the resolved location.
    #[error("Config not found: {0}. Create it or pass --config <path>.")]
    ConfigMissing(String),

    /// Configuration file parsed but holds invalid values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}

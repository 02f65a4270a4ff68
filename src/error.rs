//! Error types and handling for the advisory search tools
//!
//! The matching core is total and never produces these; they come from the
//! candidate sources, configuration loading and CLI argument checks.

use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Get the stable error code reported alongside the message
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::InvalidConfig(_) => "invalid_config",
            AppError::NotFound(_) => "not_found",
            AppError::ParseError(_) => "parse_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// Process exit code for CLI mode
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) | AppError::InvalidConfig(_) => 1,
            AppError::ParseError(_) => 2,
            AppError::NotFound(_) => 3,
            AppError::Io(_) => 5,
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(err.to_string())
        } else {
            AppError::Io(err.to_string())
        }
    }
}

/// Validate a free-text filter term coming from the command line
pub fn validate_term(term: &str) -> Result<(), AppError> {
    if term.chars().count() > 200 {
        return Err(AppError::InvalidInput(
            "Search term too long, maximum 200 characters".to_string(),
        ));
    }

    Ok(())
}

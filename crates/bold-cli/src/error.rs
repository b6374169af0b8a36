//! Error types for the command line driver

use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// BOLD API error
    Bold(bold_api::BoldError),
    /// Reading a query file or writing output failed
    Io(Box<std::io::Error>),
    /// Query file is not valid JSON, or output could not be rendered
    Json(serde_json::Error),
    /// Configuration error
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bold(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bold(e) => Some(e),
            Self::Io(e) => Some(e.as_ref()),
            Self::Json(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<bold_api::BoldError> for CliError {
    fn from(e: bold_api::BoldError) -> Self {
        Self::Bold(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Box::new(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for CliError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

//! Error types for the BOLD API client

use std::fmt;

/// Errors that can occur when interacting with the BOLD APIs
#[derive(Debug)]
pub enum BoldError {
    /// A caller-supplied argument is outside the set the endpoint accepts.
    /// Raised before any request is sent.
    InvalidArgument {
        argument: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },
    /// The service answered with a non-success status
    Http { status: u16, body: Vec<u8> },
    /// The request itself failed (connection, DNS, timeout)
    Transport(Box<dyn std::error::Error + Send + Sync>),
    /// Failed to parse a JSON response
    Json(serde_json::Error),
    /// Failed to write a downloaded file
    Io(Box<std::io::Error>),
}

impl BoldError {
    pub(crate) fn invalid_argument(
        argument: &'static str,
        value: impl fmt::Display,
        accepted: &[&'static str],
    ) -> Self {
        Self::InvalidArgument {
            argument,
            value: value.to_string(),
            accepted: accepted.to_vec(),
        }
    }

    /// HTTP status code, if the service answered with an error status
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for BoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                argument,
                value,
                accepted,
            } => write!(
                f,
                "Invalid {}: '{}' (expected one of: {})",
                argument,
                value,
                accepted.join(", ")
            ),
            Self::Http { status, body } => write!(
                f,
                "BOLD returned status {}: {}",
                status,
                String::from_utf8_lossy(body)
            ),
            Self::Transport(e) => write!(f, "BOLD transport error: {}", e),
            Self::Json(e) => write!(f, "BOLD JSON parse error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BoldError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(Box::new(e))
    }
}

impl From<serde_json::Error> for BoldError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for BoldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Box::new(e))
    }
}

/// Result type for BOLD API operations
pub type Result<T> = std::result::Result<T, BoldError>;

//! Unified error types for the SEOZoom MCP server.
//!
//! Every failure the client can produce falls into one of three kinds:
//! configuration, validation, or transport. Callers never see partial results.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::config::ConfigError;

/// Unified error types for the SEOZoom client and server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Missing or unusable configuration (e.g., no API key).
    #[error("CONFIGURATION_ERROR: {0}")]
    Configuration(String),

    /// A caller-supplied value was rejected before any network I/O.
    #[error("VALIDATION_ERROR: {0}")]
    Validation(String),

    /// The request failed upstream or never completed.
    ///
    /// `status` is `None` for connection failures and timeouts.
    #[error("TRANSPORT_ERROR: {message}")]
    Transport { status: Option<u16>, message: String },
}

impl Error {
    /// Transport failure without an HTTP status (connect error, timeout).
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport { status: None, message: message.into() }
    }

    /// Transport failure tied to an HTTP response status.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Error::Transport { status: Some(status), message: message.into() }
    }

    /// The bare message, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Error::Configuration(msg) | Error::Validation(msg) => msg,
            Error::Transport { message, .. } => message,
        }
    }

    /// HTTP status of a transport failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, data) = match &err {
            Error::Configuration(_) => (-32001, None),
            Error::Validation(_) => (-32602, None),
            Error::Transport { status, .. } => (-32000, status.map(|s| serde_json::json!({ "status": s }))),
        };

        McpError { code: ErrorCode(code), message: err.message().to_string().into(), data }
    }
}

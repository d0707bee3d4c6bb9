//! Error handling module for the Ideaboard client core.
//!
//! Provides centralized error types with stable codes and the user-facing
//! notification text each failure maps to.

use serde::Serialize;

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const REMOTE_READ_ERROR: &str = "REMOTE_READ_ERROR";
    pub const REMOTE_WRITE_ERROR: &str = "REMOTE_WRITE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// A single field-scoped validation failure, recoverable by user edit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Client-side validation failed; no remote call was attempted
    Validation(Vec<FieldError>),
    /// The list query failed; no partial data is returned
    RemoteRead(String),
    /// An insert command failed; the operation is not retried automatically
    RemoteWrite(String),
    /// The remote store returned a payload this client cannot decode
    Decode(String),
    /// Startup misconfiguration
    Config(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::RemoteRead(_) => codes::REMOTE_READ_ERROR,
            AppError::RemoteWrite(_) => codes::REMOTE_WRITE_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(fields) => fields
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; "),
            AppError::RemoteRead(msg) => msg.clone(),
            AppError::RemoteWrite(msg) => msg.clone(),
            AppError::Decode(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }

}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Remote store transport error: {:?}", err);
        // Writes wrap this themselves; a bare transport error defaults to a read
        AppError::RemoteRead(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Payload decode error: {:?}", err);
        AppError::Decode(format!("Decode error: {}", err))
    }
}

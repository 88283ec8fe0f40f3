//! Error types for the Trello client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all Trello client operations.
#[derive(Error, Debug)]
pub enum TrelloError {
    /// Credentials file is missing, malformed or still holds placeholders
    #[error("{message}")]
    ConfigUnusable { message: String },
    /// The server rejected the request (HTTP 4xx)
    #[error("{reason}: {body}")]
    Client { reason: String, body: String },
    /// The server failed to handle the request (HTTP 5xx)
    #[error("{reason}: {body}")]
    Server { reason: String, body: String },
    /// A field was requested that neither local storage nor a refresh could
    /// provide
    #[error("{resource} has no field '{field}'")]
    MissingField {
        resource: &'static str,
        field: String,
    },
    /// Invalid argument validation errors
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
    /// The request never produced an HTTP response
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating argument validation errors.
pub struct InvalidArgumentBuilder {
    field: String,
}

impl InvalidArgumentBuilder {
    /// Create a new invalid argument error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrelloError {
        TrelloError::InvalidArgument {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrelloError {
    /// Creates a builder for argument validation errors.
    pub fn invalid_argument(field: impl Into<String>) -> InvalidArgumentBuilder {
        InvalidArgumentBuilder::new(field)
    }

    /// Creates a configuration error with the given message.
    pub fn config_unusable(message: impl Into<String>) -> Self {
        Self::ConfigUnusable {
            message: message.into(),
        }
    }

    /// Whether the server classified the request as the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Client { .. })
    }

    /// Whether the server reported an internal or upstream fault.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

/// Result type alias for Trello client operations
pub type Result<T> = std::result::Result<T, TrelloError>;

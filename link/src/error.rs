//! Error types for mindsdb-link

use thiserror::Error;

/// Errors returned by the MindsDB client and its facades
#[derive(Error, Debug)]
pub enum MindsDbError {
    /// Transport-level failure from the underlying HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The server answered a SQL statement with an `error` result
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for MindsDbError {
    fn from(err: serde_json::Error) -> Self {
        MindsDbError::SerializationError(err.to_string())
    }
}

/// Result type for mindsdb-link operations
pub type Result<T> = std::result::Result<T, MindsDbError>;

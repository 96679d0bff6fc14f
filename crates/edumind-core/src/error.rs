//! Core error types for edumind-core.
//!
//! Validation problems in domain operations are not errors: those calls are
//! silent no-ops. The types here cover storage, configuration and the
//! assistant gateway, which callers either propagate or recover from with a
//! fallback value.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for edumind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Assistant gateway errors
    #[error("Assistant error: {0}")]
    Gateway(#[from] GatewayError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// No usable data directory
    #[error("Cannot determine data directory: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a zero-padded 24h `HH:MM` string
    #[error("Invalid clock time '{0}': expected zero-padded HH:MM")]
    InvalidClockTime(String),
}

/// Failure to turn an upstream model answer into typed data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Upstream text is not JSON at all
    #[error("response is not valid JSON: {0}")]
    MalformedJson(String),

    /// JSON parsed but does not have the expected top-level shape
    #[error("expected {expected}, got {found}")]
    UnexpectedShape { expected: &'static str, found: String },

    /// One plan entry failed validation
    #[error("plan item {index}: {message}")]
    InvalidItem { index: usize, message: String },
}

/// Errors raised at the assistant gateway boundary.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No API key configured
    #[error("no API key configured; set GEMINI_API_KEY or run `edumind-cli auth set-key`")]
    MissingApiKey,

    /// Another request is still outstanding
    #[error("another assistant request is still in progress")]
    Busy,

    /// Upstream content could not be decoded
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Upstream returned no candidate text
    #[error("upstream returned an empty response")]
    EmptyResponse,

    /// Invalid endpoint configuration
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// OS keyring could not be read or written
    #[error("credential store: {0}")]
    Credentials(#[from] keyring::Error),
}

/// Why no position was obtained for a study-spot search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The user or platform refused access
    #[error("location access denied")]
    Denied,

    /// No position source is available
    #[error("location unavailable")]
    Unavailable,
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked
                    || err.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

//! Error types for the scout pipeline

use thiserror::Error;

/// Pipeline-wide error type
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScoutError {
    pub fn api(msg: impl Into<String>) -> Self {
        ScoutError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        ScoutError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        ScoutError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ScoutError::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ScoutError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ScoutError::Internal(msg.into())
    }
}

/// Result type alias for scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

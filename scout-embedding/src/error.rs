//! Error types for embedding operations

use scout_core::ScoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<EmbeddingError> for ScoutError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::OpenAI(e) => ScoutError::api(e.to_string()),
            EmbeddingError::Database(e) => ScoutError::internal(e),
            EmbeddingError::Encode(e) => ScoutError::parse(e.to_string()),
            EmbeddingError::Decode(e) => ScoutError::parse(e.to_string()),
            EmbeddingError::InvalidDimension { expected, actual } => ScoutError::parse(format!(
                "invalid embedding dimension: expected {expected}, got {actual}"
            )),
            EmbeddingError::NotFound(e) => ScoutError::not_found(e),
            EmbeddingError::Config(e) => ScoutError::config(e),
        }
    }
}

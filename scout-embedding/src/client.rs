//! OpenAI embedding client

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::embeddings::{CreateEmbeddingRequest, EmbeddingInput},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    error::{EmbeddingError, Result},
    types::EmbeddingVector,
};

/// Seam over embedding generation so retrieval can be exercised without
/// network access
#[async_trait]
pub trait EmbedApi: Send + Sync {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector>;
}

/// OpenAI embedding client
pub struct EmbeddingClient {
    client: Client<OpenAIConfig>,
    model: String,
    dimension: usize,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// Uses text-embedding-3-small model (1536 dimensions)
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: "text-embedding-3-small".to_string(),
            dimension: 1536,
        }
    }

    /// Create a client from the OPENAI_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            EmbeddingError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key))
    }

    /// Generate embedding for arbitrary text
    #[instrument(skip(self, text))]
    pub async fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
        let request = CreateEmbeddingRequest {
            model: self.model.clone(),
            input: EmbeddingInput::String(text.to_string()),
            encoding_format: None,
            dimensions: None,
            user: None,
        };

        let response = self.client.embeddings().create(request).await?;

        if response.data.is_empty() {
            return Err(EmbeddingError::Config(
                "No embeddings returned from API".to_string(),
            ));
        }

        let embedding = response.data[0].embedding.clone();

        if embedding.len() != self.dimension {
            return Err(EmbeddingError::InvalidDimension {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        debug!(
            "Generated embedding: dimension={}, model={}",
            embedding.len(),
            self.model
        );

        Ok(embedding)
    }

    /// Get the embedding model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

#[async_trait]
impl EmbedApi for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector> {
        self.embed_text(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires API key
    async fn test_embed_text() {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
        let client = EmbeddingClient::new(api_key);

        let embedding = client
            .embed_text("2025년 AI 스타트업 업계 평균 Revenue Multiple")
            .await
            .expect("Failed to generate embedding");

        assert_eq!(embedding.len(), 1536);
    }
}

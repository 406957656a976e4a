//! Core types for embeddings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embedding vector (1536 dimensions for text-embedding-3-small)
pub type EmbeddingVector = Vec<f32>;

/// Collection holding the industry baseline document(s) used by the
/// investment judgment agent
pub const BASELINE_COLLECTION: &str = "industry_baseline";

/// Collection holding indexed research paper abstracts
pub const PAPERS_COLLECTION: &str = "papers";

/// An embedded document stored in a named collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Collection this document belongs to
    pub collection: String,
    /// Unique identifier within the collection
    pub doc_id: String,
    /// Text the embedding was generated from
    pub content: String,
    /// The embedding vector
    pub embedding: EmbeddingVector,
    /// Embedding dimension (should be 1536)
    pub dimension: usize,
    /// Model used (text-embedding-3-small)
    pub model: String,
    /// When this document was indexed
    pub created_at: DateTime<Utc>,
}

/// Similarity match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMatch {
    pub doc_id: String,
    pub content: String,
    /// Cosine similarity score
    pub score: f64,
}

impl StoredDocument {
    pub fn new(
        collection: String,
        doc_id: String,
        content: String,
        embedding: EmbeddingVector,
    ) -> Self {
        Self {
            collection,
            doc_id,
            content,
            dimension: embedding.len(),
            embedding,
            model: "text-embedding-3-small".to_string(),
            created_at: Utc::now(),
        }
    }
}

//! Embedding storage and retrieval for the scout pipeline
//!
//! Generates vector embeddings with OpenAI's text-embedding-3-small model,
//! persists them in SQLite collections, and serves cosine-similarity top-k
//! lookups for the technology and investment agents.

pub mod client;
pub mod error;
pub mod index;
pub mod similarity;
pub mod store;
pub mod types;

pub use client::{EmbedApi, EmbeddingClient};
pub use error::{EmbeddingError, Result};
pub use index::DocumentIndex;
pub use similarity::{cosine_similarity, top_k_documents};
pub use store::VectorStore;
pub use types::{
    BASELINE_COLLECTION, DocumentMatch, EmbeddingVector, PAPERS_COLLECTION, StoredDocument,
};

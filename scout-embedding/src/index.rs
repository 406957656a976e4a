//! Collection-scoped retrieval over the vector store

use std::sync::Arc;

use tracing::instrument;

use crate::{
    client::EmbedApi,
    error::Result,
    similarity::top_k_documents,
    store::VectorStore,
    types::{DocumentMatch, StoredDocument},
};

/// An embedder plus one named collection in the store
///
/// The retrieval agents hold one of these per corpus (papers, industry
/// baseline) and never touch the store layout directly.
pub struct DocumentIndex {
    embedder: Arc<dyn EmbedApi>,
    store: Arc<VectorStore>,
    collection: String,
}

impl DocumentIndex {
    pub fn new(embedder: Arc<dyn EmbedApi>, store: Arc<VectorStore>, collection: &str) -> Self {
        Self {
            embedder,
            store,
            collection: collection.to_string(),
        }
    }

    /// Embed and upsert one document
    #[instrument(skip(self, content))]
    pub async fn add(&self, doc_id: &str, content: &str) -> Result<()> {
        let embedding = self.embedder.embed(content).await?;
        let document = StoredDocument::new(
            self.collection.clone(),
            doc_id.to_string(),
            content.to_string(),
            embedding,
        );
        self.store.save_document(&document)
    }

    /// Retrieve the k most similar documents for a query
    #[instrument(skip(self), fields(collection = %self.collection))]
    pub async fn top_k(&self, query: &str, k: usize) -> Result<Vec<DocumentMatch>> {
        let query_embedding = self.embedder.embed(query).await?;
        let documents = self.store.load_collection(&self.collection)?;
        Ok(top_k_documents(&query_embedding, &documents, k))
    }

    /// Number of indexed documents
    pub fn len(&self) -> Result<usize> {
        self.store.count(&self.collection)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::EmbeddingVector;
    use async_trait::async_trait;

    /// Maps known keywords onto fixed axes so similarity is deterministic
    struct StubEmbedder;

    #[async_trait]
    impl EmbedApi for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<EmbeddingVector> {
            let mut v = vec![0.0_f32; 3];
            if text.contains("valuation") {
                v[0] = 1.0;
            }
            if text.contains("robotics") {
                v[1] = 1.0;
            }
            if v == [0.0, 0.0, 0.0] {
                v[2] = 1.0;
            }
            Ok(v)
        }
    }

    fn make_index() -> DocumentIndex {
        let store = Arc::new(VectorStore::new_in_memory().unwrap());
        DocumentIndex::new(Arc::new(StubEmbedder), store, "papers")
    }

    #[tokio::test]
    async fn test_add_then_top_k() {
        let index = make_index();
        index.add("p1", "startup valuation methods").await.unwrap();
        index.add("p2", "robotics locomotion survey").await.unwrap();

        let matches = index.top_k("valuation multiples", 1).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].doc_id, "p1");
        assert_eq!(matches[0].content, "startup valuation methods");
    }

    #[tokio::test]
    async fn test_top_k_on_empty_collection() {
        let index = make_index();
        assert!(index.is_empty().unwrap());
        let matches = index.top_k("anything", 5).await.unwrap();
        assert!(matches.is_empty());
    }
}

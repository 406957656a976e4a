//! SQLite storage for embedded documents using rusqlite

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{Connection, params};
use tracing::{debug, info, instrument};

use crate::{
    error::{EmbeddingError, Result},
    types::StoredDocument,
};

/// SQLite store for embedded documents, partitioned into named collections
pub struct VectorStore {
    conn: Arc<Mutex<Connection>>,
}

impl VectorStore {
    /// Open (or create) a store backed by a database file
    #[instrument(skip(database_path))]
    pub fn new<P: AsRef<Path> + std::fmt::Debug>(database_path: P) -> Result<Self> {
        info!("Opening vector database: {:?}", database_path.as_ref());
        let conn = Connection::open(database_path.as_ref())
            .map_err(|e| EmbeddingError::Database(format!("Failed to open database: {}", e)))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.init_tables()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| EmbeddingError::Database(format!("Failed to create in-memory DB: {}", e)))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.init_tables()?;
        Ok(store)
    }

    /// Initialize database tables
    fn init_tables(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                doc_id TEXT NOT NULL,
                content TEXT NOT NULL,
                embedding BLOB NOT NULL,
                dimension INTEGER NOT NULL,
                model TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (collection, doc_id)
            )",
            [],
        )
        .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection
             ON documents(collection)",
            [],
        )
        .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        info!("Vector database tables initialized");
        Ok(())
    }

    /// Save or update a document
    #[instrument(skip(self, document), fields(collection = %document.collection, doc_id = %document.doc_id))]
    pub fn save_document(&self, document: &StoredDocument) -> Result<()> {
        let embedding_bytes =
            bincode::serde::encode_to_vec(&document.embedding, bincode::config::standard())?;
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO documents
             (collection, doc_id, content, embedding, dimension, model, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(collection, doc_id) DO UPDATE SET
                content = excluded.content,
                embedding = excluded.embedding,
                dimension = excluded.dimension,
                model = excluded.model,
                created_at = excluded.created_at",
            params![
                &document.collection,
                &document.doc_id,
                &document.content,
                &embedding_bytes,
                document.dimension as i64,
                &document.model,
                document.created_at.timestamp(),
            ],
        )
        .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        debug!("Saved document {}/{}", document.collection, document.doc_id);
        Ok(())
    }

    /// Get a specific document
    #[instrument(skip(self))]
    pub fn get_document(&self, collection: &str, doc_id: &str) -> Result<StoredDocument> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT collection, doc_id, content, embedding, dimension, model, created_at
                 FROM documents
                 WHERE collection = ? AND doc_id = ?",
            )
            .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        let result = stmt
            .query_row(params![collection, doc_id], |row| {
                let embedding_bytes: Vec<u8> = row.get(3)?;
                let (embedding, _): (Vec<f32>, usize) =
                    bincode::serde::decode_from_slice(&embedding_bytes, bincode::config::standard())
                        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

                let created_at: i64 = row.get(6)?;

                Ok(StoredDocument {
                    collection: row.get(0)?,
                    doc_id: row.get(1)?,
                    content: row.get(2)?,
                    embedding,
                    dimension: row.get::<_, i64>(4)? as usize,
                    model: row.get(5)?,
                    created_at: chrono::DateTime::from_timestamp(created_at, 0)
                        .unwrap_or_else(Utc::now),
                })
            })
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    EmbeddingError::NotFound(format!("{}/{}", collection, doc_id))
                }
                _ => EmbeddingError::Database(e.to_string()),
            })?;

        Ok(result)
    }

    /// Load all documents in a collection
    ///
    /// Returns (doc_id, content, embedding) tuples for batch similarity
    /// calculations.
    #[instrument(skip(self))]
    pub fn load_collection(&self, collection: &str) -> Result<Vec<(String, String, Vec<f32>)>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT doc_id, content, embedding
                 FROM documents
                 WHERE collection = ?
                 ORDER BY created_at DESC",
            )
            .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![collection], |row| {
                let doc_id: String = row.get(0)?;
                let content: String = row.get(1)?;
                let embedding_bytes: Vec<u8> = row.get(2)?;
                Ok((doc_id, content, embedding_bytes))
            })
            .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            let (doc_id, content, embedding_bytes) =
                row.map_err(|e| EmbeddingError::Database(e.to_string()))?;
            let (embedding, _): (Vec<f32>, usize) =
                bincode::serde::decode_from_slice(&embedding_bytes, bincode::config::standard())?;
            results.push((doc_id, content, embedding));
        }

        debug!("Loaded {} documents from {}", results.len(), collection);
        Ok(results)
    }

    /// Count documents in a collection
    pub fn count(&self, collection: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM documents WHERE collection = ?",
                params![collection],
                |row| row.get(0),
            )
            .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        Ok(count as usize)
    }

    /// Delete every document in a collection
    pub fn delete_collection(&self, collection: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap();

        let deleted = conn
            .execute(
                "DELETE FROM documents WHERE collection = ?",
                params![collection],
            )
            .map_err(|e| EmbeddingError::Database(e.to_string()))?;

        debug!("Deleted {} documents from {}", deleted, collection);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PAPERS_COLLECTION, StoredDocument};

    fn create_test_store() -> VectorStore {
        VectorStore::new_in_memory().expect("Failed to create test store")
    }

    #[test]
    fn test_save_and_load_document() {
        let store = create_test_store();

        let document = StoredDocument::new(
            PAPERS_COLLECTION.to_string(),
            "arxiv:2501.00001".to_string(),
            "Retrieval-augmented valuation of early-stage ventures".to_string(),
            vec![0.1; 1536],
        );

        store.save_document(&document).expect("Failed to save");

        let loaded = store
            .get_document(PAPERS_COLLECTION, "arxiv:2501.00001")
            .expect("Failed to load");

        assert_eq!(loaded.doc_id, "arxiv:2501.00001");
        assert_eq!(loaded.embedding.len(), 1536);
        assert_eq!(loaded.dimension, 1536);
    }

    #[test]
    fn test_load_collection_is_partitioned() {
        let store = create_test_store();

        for i in 0..5 {
            let document = StoredDocument::new(
                PAPERS_COLLECTION.to_string(),
                format!("paper_{}", i),
                format!("Paper {}", i),
                vec![0.1; 1536],
            );
            store.save_document(&document).unwrap();
        }
        let other = StoredDocument::new(
            "industry_baseline".to_string(),
            "baseline".to_string(),
            "baseline doc".to_string(),
            vec![0.2; 1536],
        );
        store.save_document(&other).unwrap();

        let papers = store.load_collection(PAPERS_COLLECTION).unwrap();
        assert_eq!(papers.len(), 5);
        assert_eq!(store.count("industry_baseline").unwrap(), 1);
    }

    #[test]
    fn test_upsert_overwrites() {
        let store = create_test_store();

        let first = StoredDocument::new(
            PAPERS_COLLECTION.to_string(),
            "paper_1".to_string(),
            "v1".to_string(),
            vec![0.1; 1536],
        );
        store.save_document(&first).unwrap();

        let second = StoredDocument::new(
            PAPERS_COLLECTION.to_string(),
            "paper_1".to_string(),
            "v2".to_string(),
            vec![0.3; 1536],
        );
        store.save_document(&second).unwrap();

        let loaded = store.get_document(PAPERS_COLLECTION, "paper_1").unwrap();
        assert_eq!(loaded.content, "v2");
        assert_eq!(store.count(PAPERS_COLLECTION).unwrap(), 1);
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let store = create_test_store();
        let err = store.get_document(PAPERS_COLLECTION, "missing").unwrap_err();
        assert!(matches!(err, EmbeddingError::NotFound(_)));
    }
}

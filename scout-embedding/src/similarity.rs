//! Cosine similarity calculations

use ndarray::ArrayView1;
use tracing::debug;

use crate::types::DocumentMatch;

/// Calculate cosine similarity between two embeddings
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "Embeddings must have same dimension (got {} and {})",
        a.len(),
        b.len()
    );

    let a_view = ArrayView1::from(a);
    let b_view = ArrayView1::from(b);

    let dot_product = a_view.dot(&b_view);
    let norm_a = a_view.dot(&a_view).sqrt();
    let norm_b = b_view.dot(&b_view).sqrt();

    // Avoid division by zero
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)) as f64
}

/// Find the top-K most similar documents for a query embedding
///
/// `documents` holds (doc_id, content, embedding) tuples as returned by
/// `VectorStore::load_collection`. Results are sorted by score, highest
/// first.
pub fn top_k_documents(
    query_embedding: &[f32],
    documents: &[(String, String, Vec<f32>)],
    top_k: usize,
) -> Vec<DocumentMatch> {
    debug!(
        "Ranking {} candidate documents, top_k={}",
        documents.len(),
        top_k
    );

    let mut matches: Vec<DocumentMatch> = documents
        .iter()
        .map(|(doc_id, content, embedding)| DocumentMatch {
            doc_id: doc_id.clone(),
            content: content.clone(),
            score: cosine_similarity(query_embedding, embedding),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches.truncate(top_k);

    if !matches.is_empty() {
        debug!(
            "Top match: doc_id={}, score={:.3}",
            matches[0].doc_id, matches[0].score
        );
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        let sim = cosine_similarity(&a, &b);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_top_k_documents_orders_by_score() {
        let query = vec![1.0, 0.0, 0.0];

        let documents = vec![
            ("doc1".to_string(), "perfect".to_string(), vec![1.0, 0.0, 0.0]),
            ("doc2".to_string(), "close".to_string(), vec![0.8, 0.6, 0.0]),
            ("doc3".to_string(), "orthogonal".to_string(), vec![0.0, 1.0, 0.0]),
        ];

        let matches = top_k_documents(&query, &documents, 2);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].doc_id, "doc1");
        assert!((matches[0].score - 1.0).abs() < 1e-6);
        assert_eq!(matches[1].doc_id, "doc2");
    }

    #[test]
    fn test_top_k_documents_empty() {
        let matches = top_k_documents(&[1.0, 0.0], &[], 3);
        assert!(matches.is_empty());
    }
}

//! In-memory store for synthesized investment reports
//!
//! Reports are kept for the lifetime of the process so the download
//! endpoint can serve the most recent exploration without re-running it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A synthesized report, keyed by a generated id
#[derive(Debug, Clone)]
pub struct StoredReport {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Keeps reports in memory and remembers which one is newest
pub struct ReportStore {
    reports: RwLock<HashMap<String, StoredReport>>,
    latest: RwLock<Option<String>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
            latest: RwLock::new(None),
        }
    }

    /// Store a report and mark it as the latest, returning its id
    pub async fn insert(&self, text: impl Into<String>) -> String {
        let report = StoredReport {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            created_at: Utc::now(),
        };
        let id = report.id.clone();

        {
            let mut reports = self.reports.write().await;
            reports.insert(id.clone(), report);
        }
        {
            let mut latest = self.latest.write().await;
            *latest = Some(id.clone());
        }

        id
    }

    pub async fn get(&self, id: &str) -> Option<StoredReport> {
        let reports = self.reports.read().await;
        reports.get(id).cloned()
    }

    /// Text of the most recently stored report, if any
    pub async fn latest_text(&self) -> Option<String> {
        let latest = self.latest.read().await;
        let id = latest.as_ref()?;
        let reports = self.reports.read().await;
        reports.get(id).map(|r| r.text.clone())
    }

    pub async fn len(&self) -> usize {
        let reports = self.reports.read().await;
        reports.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_has_no_latest() {
        let store = ReportStore::new();
        assert!(store.latest_text().await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ReportStore::new();
        let id = store.insert("보고서 본문").await;

        let stored = store.get(&id).await.unwrap();
        assert_eq!(stored.text, "보고서 본문");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_latest_tracks_newest_insert() {
        let store = ReportStore::new();
        store.insert("첫 번째").await;
        store.insert("두 번째").await;

        assert_eq!(store.latest_text().await.as_deref(), Some("두 번째"));
        assert_eq!(store.len().await, 2);
    }
}

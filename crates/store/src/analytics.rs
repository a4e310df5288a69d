//! Usage analytics counters

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use threadtalk_core::Analytics;

use crate::client::RestClient;
use crate::Result;

/// Per-user usage counters.
///
/// `ensure` is fetch-or-create: a user's first read materializes a row
/// with a zero count, the way the original client does on first load.
#[async_trait]
pub trait AnalyticsStore: Send + Sync + 'static {
    /// Fetch the user's analytics row, creating it with zeroed counters
    /// if none exists.
    async fn ensure(&self, user_id: &str) -> Result<Analytics>;

    /// Bump the saved-posts counter and return the updated row
    async fn increment_saved(&self, user_id: &str) -> Result<Analytics>;
}

/// REST-backed analytics store
pub struct RestAnalyticsStore {
    client: RestClient,
}

impl RestAnalyticsStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsStore for RestAnalyticsStore {
    async fn ensure(&self, user_id: &str) -> Result<Analytics> {
        match self.client.get_json(&format!("/analytics/{user_id}")).await {
            Ok(row) => Ok(row),
            Err(crate::StoreError::Api { status: 404, .. }) => {
                self.client
                    .post_json(&format!("/analytics/{user_id}"), &serde_json::json!({}))
                    .await
            },
            Err(e) => Err(e),
        }
    }

    async fn increment_saved(&self, user_id: &str) -> Result<Analytics> {
        self.client
            .post_json(
                &format!("/analytics/{user_id}/increment"),
                &serde_json::json!({}),
            )
            .await
    }
}

/// In-memory analytics store for tests
#[derive(Default)]
pub struct MemoryAnalyticsStore {
    rows: Mutex<HashMap<String, Analytics>>,
}

impl MemoryAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalyticsStore for MemoryAnalyticsStore {
    async fn ensure(&self, user_id: &str) -> Result<Analytics> {
        let mut rows = self.rows.lock();
        let row = rows.entry(user_id.to_string()).or_insert_with(|| Analytics {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            saved_posts_count: 0,
            updated_at: Utc::now(),
        });
        Ok(row.clone())
    }

    async fn increment_saved(&self, user_id: &str) -> Result<Analytics> {
        let mut rows = self.rows.lock();
        let row = rows.entry(user_id.to_string()).or_insert_with(|| Analytics {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            saved_posts_count: 0,
            updated_at: Utc::now(),
        });
        row.saved_posts_count += 1;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_creates_once() {
        let store = MemoryAnalyticsStore::new();

        let first = store.ensure("user-1").await.unwrap();
        assert_eq!(first.saved_posts_count, 0);

        let second = store.ensure("user-1").await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_increment() {
        let store = MemoryAnalyticsStore::new();
        store.ensure("user-1").await.unwrap();

        let row = store.increment_saved("user-1").await.unwrap();
        assert_eq!(row.saved_posts_count, 1);

        let row = store.increment_saved("user-1").await.unwrap();
        assert_eq!(row.saved_posts_count, 2);
    }
}

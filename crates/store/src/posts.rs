//! Saved post storage

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use threadtalk_core::RedditPost;

use crate::client::RestClient;
use crate::{Result, StoreError};

/// CRUD over a user's saved posts.
#[async_trait]
pub trait PostStore: Send + Sync + 'static {
    /// Persist a post for its owning user; returns the stored row with
    /// its assigned id and timestamps.
    async fn save_post(&self, post: RedditPost) -> Result<RedditPost>;

    /// All posts saved by a user, newest first
    async fn list_posts(&self, user_id: &str) -> Result<Vec<RedditPost>>;

    /// One saved post
    async fn get_post(&self, user_id: &str, post_id: &str) -> Result<RedditPost>;

    /// Remove a saved post
    async fn delete_post(&self, user_id: &str, post_id: &str) -> Result<()>;
}

/// REST-backed post store
pub struct RestPostStore {
    client: RestClient,
}

impl RestPostStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostStore for RestPostStore {
    async fn save_post(&self, post: RedditPost) -> Result<RedditPost> {
        self.client.post_json("/posts", &post).await
    }

    async fn list_posts(&self, user_id: &str) -> Result<Vec<RedditPost>> {
        self.client
            .get_json(&format!("/posts?user_id={user_id}"))
            .await
    }

    async fn get_post(&self, user_id: &str, post_id: &str) -> Result<RedditPost> {
        self.client
            .get_json(&format!("/posts/{post_id}?user_id={user_id}"))
            .await
    }

    async fn delete_post(&self, user_id: &str, post_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/posts/{post_id}?user_id={user_id}"))
            .await
    }
}

/// In-memory post store for tests
#[derive(Default)]
pub struct MemoryPostStore {
    rows: Mutex<HashMap<String, Vec<RedditPost>>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn save_post(&self, mut post: RedditPost) -> Result<RedditPost> {
        let now = Utc::now();
        if post.id.is_empty() {
            post.id = Uuid::new_v4().to_string();
            post.created_at = now;
        }
        post.updated_at = now;

        let mut rows = self.rows.lock();
        let user_rows = rows.entry(post.user_id.clone()).or_default();
        user_rows.retain(|p| p.id != post.id);
        user_rows.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self, user_id: &str) -> Result<Vec<RedditPost>> {
        let rows = self.rows.lock();
        let mut posts = rows.get(user_id).cloned().unwrap_or_default();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn get_post(&self, user_id: &str, post_id: &str) -> Result<RedditPost> {
        let rows = self.rows.lock();
        rows.get(user_id)
            .and_then(|posts| posts.iter().find(|p| p.id == post_id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("post {post_id}")))
    }

    async fn delete_post(&self, user_id: &str, post_id: &str) -> Result<()> {
        let mut rows = self.rows.lock();
        let posts = rows
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("post {post_id}")))?;

        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(StoreError::NotFound(format!("post {post_id}")));
        }
        Ok(())
    }
}

//! Post, digest, and account record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A summarized Reddit post as stored for a user.
///
/// Rows in the remote `posts` table have this shape; the conversation
/// engine only reads `title`, `summary`, and `viewpoints`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPost {
    /// Row id
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Source URL the summary was generated from
    pub reddit_url: String,
    /// Post title
    pub title: String,
    /// Generated summary
    pub summary: String,
    /// Community viewpoints, in presentation order
    pub viewpoints: Vec<String>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last updated
    pub updated_at: DateTime<Utc>,
}

impl RedditPost {
    /// Build a post from a digest, attributing it to a user.
    pub fn from_digest(
        user_id: impl Into<String>,
        reddit_url: impl Into<String>,
        digest: PostDigest,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id: user_id.into(),
            reddit_url: reddit_url.into(),
            title: digest.title,
            summary: digest.summary,
            viewpoints: digest.viewpoints,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Response shape of the summarization backend: the distilled content of
/// one Reddit discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDigest {
    pub title: String,
    pub summary: String,
    pub viewpoints: Vec<String>,
}

impl PostDigest {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        viewpoints: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            viewpoints,
        }
    }
}

/// An authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Per-user usage counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub id: String,
    pub user_id: String,
    pub saved_posts_count: u64,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_digest() {
        let digest = PostDigest::new(
            "Test title",
            "Test summary",
            vec!["first view".to_string(), "second view".to_string()],
        );

        let post = RedditPost::from_digest("user-1", "https://reddit.com/r/rust/comments/abc", digest);
        assert_eq!(post.user_id, "user-1");
        assert_eq!(post.title, "Test title");
        assert_eq!(post.viewpoints.len(), 2);
    }
}

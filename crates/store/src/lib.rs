//! Thin clients for the remote relational store and authentication
//!
//! The store is external: saved posts and usage analytics live in a
//! remote service reached over REST, and authentication returns a user
//! identity or an error. This crate carries the trait seams plus two
//! implementations each: a `reqwest`-backed REST client and an in-memory
//! variant for tests. Durability is out of scope.

pub mod analytics;
pub mod auth;
pub mod client;
pub mod posts;

use thiserror::Error;

pub use analytics::{AnalyticsStore, MemoryAnalyticsStore, RestAnalyticsStore};
pub use auth::{AuthClient, MemoryAuthClient, RestAuthClient};
pub use client::{RestClient, StoreConfig};
pub use posts::{MemoryPostStore, PostStore, RestPostStore};

/// Store and auth errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Credentials rejected or session invalid
    #[error("auth error: {0}")]
    Auth(String),

    /// Requested row does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

//! Reddit URL handling and the placeholder summarization backend
//!
//! Given a Reddit post URL, the summarizer returns a digest
//! (title/summary/viewpoints). The bundled `MockSummarizer` simulates
//! backend latency and serves canned digests deterministically per URL;
//! a real backend implements `Summarizer` behind the same signature.
//! Also hosts the podcast-script builder that turns a digest into a
//! narration script.

pub mod digest;
pub mod narrator;
pub mod script;
pub mod url;

use thiserror::Error;

pub use digest::{MockSummarizer, Summarizer};
pub use narrator::PodcastNarrator;
pub use script::podcast_script;
pub use url::{extract_post_id, is_valid_reddit_url};

/// Summarization errors
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The URL is not a Reddit post URL
    #[error("not a valid Reddit post URL: {0}")]
    InvalidUrl(String),

    /// The backend failed to produce a digest
    #[error("summarization backend error: {0}")]
    Backend(String),
}

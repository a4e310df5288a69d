//! Response generation trait

use crate::post::RedditPost;
use crate::Result;
use async_trait::async_trait;

/// Context the generator may consult alongside the user's message.
///
/// The follow-up policy depends on how much conversation has accumulated,
/// so the count travels with the post instead of the generator reading
/// session state directly.
#[derive(Debug, Clone, Default)]
pub struct ResponseContext {
    /// The post under discussion, if one is selected
    pub post: Option<RedditPost>,
    /// Messages accumulated so far, including the one being answered
    pub message_count: usize,
}

impl ResponseContext {
    pub fn new(post: Option<RedditPost>, message_count: usize) -> Self {
        Self {
            post,
            message_count,
        }
    }
}

/// Produces the assistant reply for one user message.
///
/// Must not error for well-formed input; an absent post yields a fixed
/// guidance reply through the normal success path. The bundled
/// implementation is keyword-matched placeholder text; a real generation
/// backend slots in behind this signature without touching the session
/// engine.
#[async_trait]
pub trait ResponseGenerator: Send + Sync + 'static {
    /// Generate a reply to `message` given the conversation context
    async fn generate(&self, message: &str, ctx: &ResponseContext) -> Result<String>;
}

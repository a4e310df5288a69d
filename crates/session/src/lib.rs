//! Conversation session engine
//!
//! One `ConversationSession` owns one conversation about one selected
//! post: the message history, the recording/processing/playing flags,
//! and the sequencing of user-message -> assistant-reply -> playback.
//! Collaborators (speech capture, speech playback, response generation)
//! are injected at construction behind the `threadtalk-core` traits;
//! everything the session hands out is a snapshot, and state changes are
//! published on a broadcast channel instead of being polled for.

pub mod config;
pub mod events;
pub mod session;

use thiserror::Error;

pub use config::SessionConfig;
pub use events::SessionEvent;
pub use session::ConversationSession;

/// Session engine errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The response generator failed; no assistant message was committed
    #[error("generation failed: {0}")]
    Generation(String),
}

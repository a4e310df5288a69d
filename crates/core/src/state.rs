//! Conversation state snapshot type

use serde::{Deserialize, Serialize};

use crate::message::ConversationMessage;
use crate::post::RedditPost;

/// The session's single source of truth.
///
/// The session engine owns the live value; everything handed out is a
/// clone, so a snapshot never changes after the session mutates. Message
/// insertion order is conversational order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    /// Conversation so far, append-only
    pub messages: Vec<ConversationMessage>,
    /// True while capturing voice input
    pub is_recording: bool,
    /// True while a user message awaits a generated reply
    pub is_processing: bool,
    /// True while assistant speech is audibly playing
    pub is_playing: bool,
    /// The post under discussion, absent before any post is selected
    pub current_post: Option<RedditPost>,
}

impl ConversationState {
    /// Number of accumulated messages
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Whether a post has been selected
    pub fn has_post(&self) -> bool {
        self.current_post.is_some()
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageId;

    #[test]
    fn test_default_state_is_empty() {
        let state = ConversationState::default();
        assert_eq!(state.message_count(), 0);
        assert!(!state.has_post());
        assert!(!state.is_recording && !state.is_processing && !state.is_playing);
    }

    #[test]
    fn test_last_message() {
        let mut state = ConversationState::default();
        state
            .messages
            .push(ConversationMessage::user(MessageId(1), "hello"));
        state
            .messages
            .push(ConversationMessage::assistant(MessageId(2), "hi"));

        assert_eq!(state.last_message().unwrap().id, MessageId(2));
    }
}

//! Conversation message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message identifier. Assigned from a per-session monotonic counter so
/// ids order the same way the message sequence does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a message speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// End-user message
    User,
    /// Assistant reply
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single turn in the conversation. Immutable once created; the session
/// appends messages in conversational order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Ordering id
    pub id: MessageId,
    /// Speaker role
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Whether the message originated from, or produces, voice
    pub is_audio: bool,
}

impl ConversationMessage {
    /// Create a new message stamped with the current time.
    pub fn new(id: MessageId, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
            is_audio: false,
        }
    }

    /// Create a user message
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, MessageRole::Assistant, content)
    }

    /// Mark the message as voice-bearing
    pub fn with_audio(mut self, is_audio: bool) -> Self {
        self.is_audio = is_audio;
        self
    }

    /// Get word count
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ConversationMessage::user(MessageId(1), "What are the main arguments?");
        assert_eq!(msg.role, MessageRole::User);
        assert!(!msg.is_audio);
        assert!(msg.word_count() > 0);

        let msg = ConversationMessage::assistant(MessageId(2), "Here's a summary.").with_audio(true);
        assert_eq!(msg.role, MessageRole::Assistant);
        assert!(msg.is_audio);
    }

    #[test]
    fn test_message_ids_order() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(7).to_string(), "7");
    }
}

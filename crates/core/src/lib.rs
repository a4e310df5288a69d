//! Core traits and types for the threadtalk conversation engine
//!
//! This crate provides foundational types used across all other crates:
//! - Core traits for pluggable backends (speech capture, speech playback,
//!   transcription, response generation)
//! - Post and digest types
//! - Conversation message and state types
//! - Audio clip type
//! - Error types

pub mod audio;
pub mod error;
pub mod message;
pub mod post;
pub mod state;
pub mod traits;

pub use audio::AudioClip;
pub use error::{Error, Result};
pub use message::{ConversationMessage, MessageId, MessageRole};
pub use post::{Analytics, PostDigest, RedditPost, User};
pub use state::ConversationState;

// Trait re-exports
pub use traits::{
    ResponseContext, ResponseGenerator, SpeechInput, SpeechOutput, Transcriber,
};

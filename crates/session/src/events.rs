//! Session events
//!
//! Emitted after every mutating operation so observers don't need to
//! poll. Events carry owned data only; receiving one never grants access
//! to live session state.

use threadtalk_core::ConversationMessage;

/// Session event
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A post was selected and the conversation reset to its greeting
    PostSelected { title: String },
    /// A message landed in the history
    MessageAppended { message: ConversationMessage },
    /// Voice capture started
    RecordingStarted,
    /// Voice capture stopped
    RecordingStopped,
    /// A user message is awaiting its generated reply
    ProcessingStarted,
    /// The reply landed (or generation failed)
    ProcessingFinished,
    /// Assistant speech playback started
    PlaybackStarted,
    /// Assistant speech playback finished or was stopped
    PlaybackStopped,
    /// The conversation was cleared
    Cleared,
}

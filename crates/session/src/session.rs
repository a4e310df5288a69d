//! The conversation session engine
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SpeechInput │────▶│   Session   │────▶│  Responder  │────▶│SpeechOutput │
//! │ (capture)   │     │  (state)    │     │ (reply)     │     │ (playback)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The session owns the state; adapters never touch it. All mutation
//! happens in short lock sections with no awaits inside, and every
//! mutating operation publishes a `SessionEvent`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

use threadtalk_core::{
    ConversationMessage, ConversationState, MessageId, MessageRole, RedditPost, ResponseContext,
    ResponseGenerator, SpeechInput, SpeechOutput,
};
use threadtalk_responder::KeywordResponder;
use threadtalk_speech::{SimulatedCapture, TimedSpeaker};

use crate::{SessionConfig, SessionError, SessionEvent};

/// One conversation about one selected post, from selection to explicit
/// clear.
///
/// Construct with the capture/playback/generation strategies for the
/// platform; the session itself never branches on capability. Cheap to
/// share: all methods take `&self`.
pub struct ConversationSession {
    session_id: String,
    config: SessionConfig,
    state: Arc<Mutex<ConversationState>>,
    input: Arc<dyn SpeechInput>,
    speaker: Arc<dyn SpeechOutput>,
    responder: Arc<dyn ResponseGenerator>,
    event_tx: broadcast::Sender<SessionEvent>,
    next_message_id: AtomicU64,
    /// Serializes whole processing turns. Overlapping
    /// `process_user_message` calls queue instead of interleaving.
    turn_guard: tokio::sync::Mutex<()>,
}

impl ConversationSession {
    /// Create a session with explicit collaborators.
    pub fn new(
        session_id: impl Into<String>,
        config: SessionConfig,
        input: Arc<dyn SpeechInput>,
        speaker: Arc<dyn SpeechOutput>,
        responder: Arc<dyn ResponseGenerator>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_buffer);

        Self {
            session_id: session_id.into(),
            config,
            state: Arc::new(Mutex::new(ConversationState::default())),
            input,
            speaker,
            responder,
            event_tx,
            next_message_id: AtomicU64::new(1),
            turn_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a fully simulated session: no hardware, canned transcripts,
    /// keyword replies, timed playback.
    pub fn simulated(config: SessionConfig) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            config,
            Arc::new(SimulatedCapture::new()),
            Arc::new(TimedSpeaker::default()),
            Arc::new(KeywordResponder::new()),
        )
    }

    /// Session id
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// An immutable snapshot of the current state. The caller owns the
    /// copy; later session mutations don't show through.
    pub fn snapshot(&self) -> ConversationState {
        self.state.lock().clone()
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Session events as a stream
    pub fn event_stream(&self) -> BroadcastStream<SessionEvent> {
        BroadcastStream::new(self.subscribe())
    }

    /// Select the post under discussion.
    ///
    /// Replaces the whole conversation with a single assistant greeting
    /// referencing the post title and resets every flag. Overwrites any
    /// in-progress conversation without confirmation; confirmation UX is
    /// the caller's concern.
    pub fn set_active_post(&self, post: RedditPost) {
        let title = post.title.clone();
        let greeting = ConversationMessage::assistant(
            self.next_id(),
            format!(
                "I'm ready to discuss this Reddit post: \"{}\". What would you like to know?",
                title
            ),
        );

        {
            let mut state = self.state.lock();
            state.current_post = Some(post);
            state.messages = vec![greeting.clone()];
            state.is_recording = false;
            state.is_processing = false;
            state.is_playing = false;
        }

        tracing::info!(session_id = %self.session_id, %title, "active post selected");
        let _ = self.event_tx.send(SessionEvent::PostSelected { title });
        let _ = self
            .event_tx
            .send(SessionEvent::MessageAppended { message: greeting });
    }

    /// Start voice capture.
    ///
    /// Acquisition failure is recovered locally: logged, recording flag
    /// left false, nothing surfaced to the caller. An active post is not
    /// required here; that precondition belongs to the caller.
    pub async fn start_recording(&self) {
        match self.input.begin().await {
            Ok(()) => {
                self.state.lock().is_recording = true;
                let _ = self.event_tx.send(SessionEvent::RecordingStarted);
                tracing::debug!(session_id = %self.session_id, "recording started");
            },
            Err(e) => {
                tracing::warn!(session_id = %self.session_id, error = %e, "failed to start recording");
                self.state.lock().is_recording = false;
            },
        }
    }

    /// Stop voice capture and return the best-effort transcript.
    ///
    /// The recording flag drops unconditionally before the capture is
    /// finalized; `None` means no capture was active or the device could
    /// not be finalized, neither of which is an error here.
    pub async fn stop_recording(&self) -> Option<String> {
        self.state.lock().is_recording = false;
        let _ = self.event_tx.send(SessionEvent::RecordingStopped);

        let transcript = self.input.end().await;
        tracing::debug!(
            session_id = %self.session_id,
            got_transcript = transcript.is_some(),
            "recording stopped"
        );
        transcript
    }

    /// Process one user message: append it, generate the assistant
    /// reply, append that, and kick off playback of the reply.
    ///
    /// Playback is fire-and-forget; this resolves once the reply is in
    /// the history. Generation failure propagates after the processing
    /// flag is reset, with no assistant message committed. Turns are
    /// serialized: a second call queues behind the first.
    pub async fn process_user_message(
        &self,
        text: impl Into<String>,
    ) -> Result<ConversationMessage, SessionError> {
        let _turn = self.turn_guard.lock().await;

        let user = self.append_message(MessageRole::User, text.into(), true);
        self.set_processing(true);

        let reply = match self.generate_reply(&user.content).await {
            Ok(reply) => reply,
            Err(e) => {
                self.set_processing(false);
                tracing::warn!(session_id = %self.session_id, error = %e, "generation failed");
                return Err(e);
            },
        };

        let assistant = self.append_message(MessageRole::Assistant, reply, true);
        self.set_processing(false);

        self.begin_playback(assistant.content.clone());
        Ok(assistant)
    }

    /// Cancel any active playback. Safe to call when nothing is playing.
    pub fn stop_playback(&self) {
        self.speaker.stop();
        self.state.lock().is_playing = false;
    }

    /// Reset the session: no messages, no post, all flags down, in one
    /// state-lock section so no intermediate state is observable.
    ///
    /// Device teardown is not part of clearing; callers that care about
    /// precise teardown stop recording/playback first.
    pub fn clear_conversation(&self) {
        {
            let mut state = self.state.lock();
            state.messages.clear();
            state.current_post = None;
            state.is_recording = false;
            state.is_processing = false;
            state.is_playing = false;
        }

        tracing::info!(session_id = %self.session_id, "conversation cleared");
        let _ = self.event_tx.send(SessionEvent::Cleared);
    }

    fn next_id(&self) -> MessageId {
        MessageId(self.next_message_id.fetch_add(1, Ordering::Relaxed))
    }

    fn append_message(
        &self,
        role: MessageRole,
        content: String,
        is_audio: bool,
    ) -> ConversationMessage {
        let message = ConversationMessage::new(self.next_id(), role, content).with_audio(is_audio);
        self.state.lock().messages.push(message.clone());
        let _ = self.event_tx.send(SessionEvent::MessageAppended {
            message: message.clone(),
        });
        message
    }

    fn set_processing(&self, processing: bool) {
        self.state.lock().is_processing = processing;
        let event = if processing {
            SessionEvent::ProcessingStarted
        } else {
            SessionEvent::ProcessingFinished
        };
        let _ = self.event_tx.send(event);
    }

    async fn generate_reply(&self, message: &str) -> Result<String, SessionError> {
        if self.config.response_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.response_delay_ms)).await;
        }

        let ctx = {
            let state = self.state.lock();
            ResponseContext::new(state.current_post.clone(), state.messages.len())
        };

        self.responder
            .generate(message, &ctx)
            .await
            .map_err(|e| SessionError::Generation(e.to_string()))
    }

    /// Narrate the reply without blocking the processing turn.
    ///
    /// The playing flag goes up before the playback task is spawned so a
    /// snapshot taken right after `process_user_message` resolves already
    /// sees it; the task only ever lowers it.
    fn begin_playback(&self, text: String) {
        self.state.lock().is_playing = true;
        let _ = self.event_tx.send(SessionEvent::PlaybackStarted);

        let state = Arc::clone(&self.state);
        let speaker = Arc::clone(&self.speaker);
        let event_tx = self.event_tx.clone();
        let session_id = self.session_id.clone();

        tokio::spawn(async move {
            if let Err(e) = speaker.speak(&text).await {
                tracing::warn!(session_id = %session_id, error = %e, "playback failed");
            }

            state.lock().is_playing = false;
            let _ = event_tx.send(SessionEvent::PlaybackStopped);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn quick_session() -> ConversationSession {
        ConversationSession::simulated(SessionConfig::default().with_response_delay_ms(0))
    }

    fn test_post() -> RedditPost {
        let now = Utc::now();
        RedditPost {
            id: "post-1".to_string(),
            user_id: "user-1".to_string(),
            reddit_url: "https://reddit.com/r/rust/comments/abc123/test".to_string(),
            title: "The Borrow Checker Debate".to_string(),
            summary: "A discussion about ownership ergonomics.".to_string(),
            viewpoints: vec!["view one".to_string(), "view two".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let session = quick_session();
        let before = session.snapshot();

        session.set_active_post(test_post());

        assert_eq!(before.message_count(), 0);
        assert_eq!(session.snapshot().message_count(), 1);
    }

    #[tokio::test]
    async fn test_greeting_references_title() {
        let session = quick_session();
        session.set_active_post(test_post());

        let state = session.snapshot();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, MessageRole::Assistant);
        assert!(state.messages[0].content.contains("The Borrow Checker Debate"));
        assert!(!state.is_recording && !state.is_processing && !state.is_playing);
    }

    #[tokio::test]
    async fn test_message_ids_are_monotonic() {
        let session = quick_session();
        session.set_active_post(test_post());
        session.process_user_message("summary please").await.unwrap();

        let state = session.snapshot();
        let ids: Vec<_> = state.messages.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_event_stream_yields_events() {
        use tokio_stream::StreamExt;

        let session = quick_session();
        let mut stream = session.event_stream();

        session.set_active_post(test_post());

        let event = tokio::time::timeout(Duration::from_secs(1), stream.next())
            .await
            .expect("no event arrived");
        assert!(matches!(
            event,
            Some(Ok(crate::SessionEvent::PostSelected { .. }))
        ));
    }

    #[tokio::test]
    async fn test_clear_resets_everything() {
        let session = quick_session();
        session.set_active_post(test_post());
        session.process_user_message("tell me a summary").await.unwrap();

        session.clear_conversation();

        let state = session.snapshot();
        assert!(state.messages.is_empty());
        assert!(state.current_post.is_none());
        assert!(!state.is_recording && !state.is_processing && !state.is_playing);
    }

    #[tokio::test]
    async fn test_selecting_new_post_restarts_conversation() {
        let session = quick_session();
        session.set_active_post(test_post());
        session.process_user_message("hello").await.unwrap();
        assert!(session.snapshot().message_count() > 1);

        let mut other = test_post();
        other.title = "A Different Thread".to_string();
        session.set_active_post(other);

        let state = session.snapshot();
        assert_eq!(state.message_count(), 1);
        assert!(state.messages[0].content.contains("A Different Thread"));
    }
}

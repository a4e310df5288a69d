//! Speech capture and playback traits
//!
//! Platform capability is selected at construction time: the session
//! engine is handed one `SpeechInput` and one `SpeechOutput` and never
//! branches on platform itself.

use crate::audio::AudioClip;
use crate::Result;
use async_trait::async_trait;

/// Microphone capture lifecycle
///
/// Implementations:
/// - `SimulatedCapture` - no-hardware fallback yielding canned transcripts
/// - `BufferedCapture` - transport-fed capture with pluggable transcription
///
/// `begin` is best-effort: a failed acquisition degrades to "not
/// recording" at the caller rather than raising to the user.
#[async_trait]
pub trait SpeechInput: Send + Sync + 'static {
    /// Acquire the capture device and start buffering.
    ///
    /// May suspend while acquiring hardware. An error here means the
    /// session stays in the not-recording state.
    async fn begin(&self) -> Result<()>;

    /// Finalize the capture, release the device, and return a
    /// best-effort transcript.
    ///
    /// Returns `None` when no capture was active; the expected
    /// "nothing was recording" condition is not an error.
    async fn end(&self) -> Option<String>;

    /// Whether a capture is currently active
    fn is_capturing(&self) -> bool;
}

/// Speech playback
///
/// `speak` resolves at natural completion; callers that want
/// fire-and-forget semantics spawn it. `stop` is idempotent.
#[async_trait]
pub trait SpeechOutput: Send + Sync + 'static {
    /// Play synthesized speech for the text, resolving when playback
    /// finishes or is stopped.
    async fn speak(&self, text: &str) -> Result<()>;

    /// Cancel any active playback. Safe to call when nothing is playing.
    fn stop(&self);

    /// Whether playback is audibly in progress
    fn is_speaking(&self) -> bool;
}

/// Speech-to-text over a finalized capture
///
/// The bundled implementation is a placeholder; a real STT backend slots
/// in behind this signature without touching the capture adapters.
#[async_trait]
pub trait Transcriber: Send + Sync + 'static {
    /// Transcribe a captured clip
    async fn transcribe(&self, clip: &AudioClip) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    // Mock implementation for testing the object-safe surface
    struct MockInput {
        active: AtomicBool,
    }

    #[async_trait]
    impl SpeechInput for MockInput {
        async fn begin(&self) -> Result<()> {
            self.active.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn end(&self) -> Option<String> {
            if self.active.swap(false, Ordering::SeqCst) {
                Some("mock transcript".to_string())
            } else {
                None
            }
        }

        fn is_capturing(&self) -> bool {
            self.active.load(Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn test_input_lifecycle() {
        let input: Box<dyn SpeechInput> = Box::new(MockInput {
            active: AtomicBool::new(false),
        });

        assert!(input.end().await.is_none());

        input.begin().await.unwrap();
        assert!(input.is_capturing());
        assert_eq!(input.end().await.as_deref(), Some("mock transcript"));
        assert!(!input.is_capturing());
    }
}

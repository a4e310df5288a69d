//! Podcast narration over a speech output adapter

use std::sync::Arc;

use threadtalk_core::{PostDigest, SpeechOutput};

use crate::script::podcast_script;

/// Narrates post digests as podcast-style audio.
///
/// One narrator wraps one speech output; `toggle` mirrors a play/stop
/// button: narrating while idle, stopping while audible.
pub struct PodcastNarrator {
    speaker: Arc<dyn SpeechOutput>,
}

impl PodcastNarrator {
    pub fn new(speaker: Arc<dyn SpeechOutput>) -> Self {
        Self { speaker }
    }

    /// Start narrating the digest, or stop the narration already
    /// playing. Returns true when playback was started.
    pub fn toggle(&self, digest: &PostDigest) -> bool {
        if self.speaker.is_speaking() {
            self.speaker.stop();
            return false;
        }

        let script = podcast_script(digest);
        let speaker = Arc::clone(&self.speaker);
        tracing::debug!(title = %digest.title, "starting podcast narration");
        tokio::spawn(async move {
            if let Err(e) = speaker.speak(&script).await {
                tracing::warn!(error = %e, "podcast narration failed");
            }
        });
        true
    }

    /// Stop any active narration. Idempotent.
    pub fn stop(&self) {
        self.speaker.stop();
    }

    /// Whether narration is audibly playing
    pub fn is_playing(&self) -> bool {
        self.speaker.is_speaking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use threadtalk_speech::{SpeakerConfig, TimedSpeaker};

    fn digest() -> PostDigest {
        PostDigest::new("Test", "Summary.", vec!["A view".to_string()])
    }

    #[tokio::test]
    async fn test_toggle_starts_then_stops() {
        let narrator = PodcastNarrator::new(Arc::new(TimedSpeaker::new(SpeakerConfig {
            millis_per_grapheme: 1000,
            min_duration_ms: 60_000,
        })));

        assert!(narrator.toggle(&digest()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(narrator.is_playing());

        // Second toggle stops instead of starting another narration.
        assert!(!narrator.toggle(&digest()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!narrator.is_playing());
    }

    #[tokio::test]
    async fn test_stop_when_idle_is_harmless() {
        let narrator = PodcastNarrator::new(Arc::new(TimedSpeaker::default()));
        narrator.stop();
        assert!(!narrator.is_playing());
    }
}

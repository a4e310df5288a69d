//! Speech playback adapters

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use unicode_segmentation::UnicodeSegmentation;

use threadtalk_core::{Result, SpeechOutput};

/// Timing parameters for the simulated speaker
#[derive(Debug, Clone)]
pub struct SpeakerConfig {
    /// Playback time per grapheme (ms)
    pub millis_per_grapheme: u64,
    /// Floor for very short utterances (ms)
    pub min_duration_ms: u64,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            millis_per_grapheme: 50,
            min_duration_ms: 2000,
        }
    }
}

/// Simulated synthesis: playback occupies a duration proportional to the
/// utterance length, with a floor for short replies. Interruptible via
/// `stop`.
pub struct TimedSpeaker {
    config: SpeakerConfig,
    speaking: AtomicBool,
    cancel: Notify,
}

impl TimedSpeaker {
    pub fn new(config: SpeakerConfig) -> Self {
        Self {
            config,
            speaking: AtomicBool::new(false),
            cancel: Notify::new(),
        }
    }

    fn playback_duration(&self, text: &str) -> Duration {
        let graphemes = text.graphemes(true).count() as u64;
        Duration::from_millis(
            (graphemes * self.config.millis_per_grapheme).max(self.config.min_duration_ms),
        )
    }
}

impl Default for TimedSpeaker {
    fn default() -> Self {
        Self::new(SpeakerConfig::default())
    }
}

#[async_trait]
impl SpeechOutput for TimedSpeaker {
    async fn speak(&self, text: &str) -> Result<()> {
        let duration = self.playback_duration(text);
        self.speaking.store(true, Ordering::SeqCst);
        tracing::debug!(ms = duration.as_millis() as u64, "playback started");

        // notify_waiters only reaches playbacks already inside the
        // select; a stop landing before this point still clears the
        // speaking flag, which is all the callers observe.
        tokio::select! {
            _ = tokio::time::sleep(duration) => {},
            _ = self.cancel.notified() => {
                tracing::debug!("playback interrupted");
            },
        }

        self.speaking.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.cancel.notify_waiters();
        self.speaking.store(false, Ordering::SeqCst);
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

/// Playback that completes immediately. For tests and muted operation.
#[derive(Debug, Default)]
pub struct NullSpeaker;

impl NullSpeaker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechOutput for NullSpeaker {
    async fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn stop(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

//! Speech capture adapters

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::mpsc;
use tokio::sync::Mutex;

use threadtalk_core::{AudioClip, Error, Result, SpeechInput, Transcriber};

use crate::transcribe::SAMPLE_TRANSCRIPTS;

/// No-hardware capture fallback.
///
/// `begin` succeeds immediately without device acquisition; `end` yields
/// a transcript drawn uniformly from the fixed sample pool. Used on
/// platforms without native capture capability.
#[derive(Debug, Default)]
pub struct SimulatedCapture {
    active: AtomicBool,
}

impl SimulatedCapture {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SpeechInput for SimulatedCapture {
    async fn begin(&self) -> Result<()> {
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn end(&self) -> Option<String> {
        if !self.active.swap(false, Ordering::SeqCst) {
            return None;
        }

        SAMPLE_TRANSCRIPTS
            .choose(&mut rand::thread_rng())
            .map(|s| s.to_string())
    }

    fn is_capturing(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Producer handle for a [`BufferedCapture`].
///
/// The audio transport pushes frames here while a capture is active;
/// frames pushed outside a capture are drained and discarded at the next
/// `begin`.
#[derive(Clone)]
pub struct CaptureFeed {
    tx: mpsc::Sender<AudioClip>,
}

impl CaptureFeed {
    /// Push one captured frame
    pub async fn push(&self, clip: AudioClip) -> Result<()> {
        self.tx
            .send(clip)
            .await
            .map_err(|_| Error::Capture("capture feed closed".to_string()))
    }
}

/// Transport-fed capture: the native path.
///
/// Frames arrive on a bounded channel between `begin` and `end`; `end`
/// finalizes the capture, releases it, and hands the buffered audio to
/// the configured transcriber.
pub struct BufferedCapture {
    rx: Mutex<mpsc::Receiver<AudioClip>>,
    active: AtomicBool,
    transcriber: Arc<dyn Transcriber>,
}

/// Create a connected feed/capture pair.
pub fn buffered(
    transcriber: Arc<dyn Transcriber>,
    capacity: usize,
) -> (CaptureFeed, BufferedCapture) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        CaptureFeed { tx },
        BufferedCapture {
            rx: Mutex::new(rx),
            active: AtomicBool::new(false),
            transcriber,
        },
    )
}

impl BufferedCapture {
    /// Drain everything currently buffered into one clip.
    ///
    /// Returns an error if the feed has disconnected, which is the
    /// closest analog of a device acquisition failure.
    async fn drain(&self) -> Result<AudioClip> {
        let mut rx = self.rx.lock().await;
        let mut clip = AudioClip::empty();
        loop {
            match rx.try_recv() {
                Ok(frame) => {
                    if clip.is_empty() {
                        clip.sample_rate = frame.sample_rate;
                    }
                    clip.extend(&frame);
                },
                Err(mpsc::error::TryRecvError::Empty) => return Ok(clip),
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    return Err(Error::Capture("capture feed closed".to_string()))
                },
            }
        }
    }
}

#[async_trait]
impl SpeechInput for BufferedCapture {
    async fn begin(&self) -> Result<()> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(Error::Capture("capture already active".to_string()));
        }

        // Discard frames that arrived outside a capture window.
        match self.drain().await {
            Ok(stale) => {
                if !stale.is_empty() {
                    tracing::debug!(frames = stale.len(), "discarded stale capture frames");
                }
                Ok(())
            },
            Err(e) => {
                self.active.store(false, Ordering::SeqCst);
                Err(e)
            },
        }
    }

    async fn end(&self) -> Option<String> {
        if !self.active.swap(false, Ordering::SeqCst) {
            return None;
        }

        let clip = match self.drain().await {
            Ok(clip) => clip,
            Err(e) => {
                tracing::warn!(error = %e, "failed to finalize capture");
                return None;
            },
        };

        if clip.is_empty() {
            tracing::debug!("capture ended with no audio");
            return None;
        }

        match self.transcriber.transcribe(&clip).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, "transcription failed");
                None
            },
        }
    }

    fn is_capturing(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcribe::StubTranscriber;

    #[tokio::test]
    async fn test_simulated_end_without_begin() {
        let capture = SimulatedCapture::new();
        assert!(capture.end().await.is_none());
    }

    #[tokio::test]
    async fn test_simulated_transcript_from_pool() {
        let capture = SimulatedCapture::new();

        for _ in 0..20 {
            capture.begin().await.unwrap();
            assert!(capture.is_capturing());

            let transcript = capture.end().await.unwrap();
            assert!(SAMPLE_TRANSCRIPTS.contains(&transcript.as_str()));
            assert!(!capture.is_capturing());
        }
    }

    #[tokio::test]
    async fn test_buffered_capture_roundtrip() {
        let (feed, capture) = buffered(Arc::new(StubTranscriber::new()), 16);

        capture.begin().await.unwrap();
        feed.push(AudioClip::new(vec![0.1; 320], 16_000)).await.unwrap();
        feed.push(AudioClip::new(vec![0.2; 320], 16_000)).await.unwrap();

        let transcript = capture.end().await.unwrap();
        assert!(SAMPLE_TRANSCRIPTS.contains(&transcript.as_str()));
    }

    #[tokio::test]
    async fn test_buffered_capture_empty_yields_none() {
        let (_feed, capture) = buffered(Arc::new(StubTranscriber::new()), 16);

        capture.begin().await.unwrap();
        assert!(capture.end().await.is_none());
    }

    #[tokio::test]
    async fn test_buffered_double_begin_fails() {
        let (_feed, capture) = buffered(Arc::new(StubTranscriber::new()), 16);

        capture.begin().await.unwrap();
        assert!(capture.begin().await.is_err());
        // The failed begin must not tear down the active capture.
        assert!(capture.is_capturing());
    }

    #[tokio::test]
    async fn test_buffered_begin_fails_when_feed_closed() {
        let (feed, capture) = buffered(Arc::new(StubTranscriber::new()), 16);
        drop(feed);

        assert!(capture.begin().await.is_err());
        assert!(!capture.is_capturing());
    }

    #[tokio::test]
    async fn test_stale_frames_discarded() {
        let (feed, capture) = buffered(Arc::new(StubTranscriber::new()), 16);

        feed.push(AudioClip::new(vec![0.3; 320], 16_000)).await.unwrap();
        capture.begin().await.unwrap();

        // Nothing pushed during the capture window.
        assert!(capture.end().await.is_none());
    }
}

//! Transcription placeholder

use async_trait::async_trait;
use threadtalk_core::{AudioClip, Error, Result, Transcriber};

/// The fixed transcript pool used by the simulated capture path and the
/// stub transcriber. Every simulated recording resolves to one of these.
pub const SAMPLE_TRANSCRIPTS: [&str; 5] = [
    "What are the main arguments in this discussion?",
    "Can you explain this topic in more detail?",
    "What do you think about the different viewpoints?",
    "How does this relate to current events?",
    "What are the implications of this discussion?",
];

/// Placeholder speech-to-text: maps a captured clip onto the fixed
/// transcript pool, keyed by clip length so identical captures transcribe
/// identically.
#[derive(Debug, Default)]
pub struct StubTranscriber;

impl StubTranscriber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String> {
        if clip.is_empty() {
            return Err(Error::Transcription("empty capture".to_string()));
        }

        let pick = clip.len() % SAMPLE_TRANSCRIPTS.len();
        Ok(SAMPLE_TRANSCRIPTS[pick].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_is_deterministic() {
        let transcriber = StubTranscriber::new();
        let clip = AudioClip::new(vec![0.1; 642], 16_000);

        let first = transcriber.transcribe(&clip).await.unwrap();
        let second = transcriber.transcribe(&clip).await.unwrap();
        assert_eq!(first, second);
        assert!(SAMPLE_TRANSCRIPTS.contains(&first.as_str()));
    }

    #[tokio::test]
    async fn test_empty_clip_errors() {
        let transcriber = StubTranscriber::new();
        assert!(transcriber.transcribe(&AudioClip::empty()).await.is_err());
    }
}

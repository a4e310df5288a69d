//! Speech capture and playback adapters
//!
//! Two capture strategies and two playback strategies, selected at
//! session construction:
//! - `SimulatedCapture` - no-hardware fallback yielding canned transcripts
//! - `BufferedCapture` - transport-fed capture run through a `Transcriber`
//! - `TimedSpeaker` - simulated synthesis with text-proportional duration
//! - `NullSpeaker` - completes immediately, for tests and muted operation
//!
//! Transcription is a placeholder (`StubTranscriber`); a real STT backend
//! implements `threadtalk_core::Transcriber` and slots into
//! `BufferedCapture` unchanged.

pub mod input;
pub mod output;
pub mod transcribe;

pub use input::{buffered, BufferedCapture, CaptureFeed, SimulatedCapture};
pub use output::{NullSpeaker, SpeakerConfig, TimedSpeaker};
pub use transcribe::{StubTranscriber, SAMPLE_TRANSCRIPTS};

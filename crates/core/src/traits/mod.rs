//! Traits for pluggable backends

pub mod responder;
pub mod speech;

pub use responder::{ResponseContext, ResponseGenerator};
pub use speech::{SpeechInput, SpeechOutput, Transcriber};

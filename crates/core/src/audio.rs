//! Audio clip type

use serde::{Deserialize, Serialize};

/// A captured chunk of mono PCM audio.
///
/// Capture adapters buffer clips between `begin()` and `end()`; the
/// transcription placeholder only looks at duration, but the shape is
/// what a real speech-to-text backend would consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Samples in the range [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Samples per second
    pub sample_rate: u32,
}

impl AudioClip {
    pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

    /// Create a clip from raw samples
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Empty clip at the default rate
    pub fn empty() -> Self {
        Self::new(Vec::new(), Self::DEFAULT_SAMPLE_RATE)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Clip duration in seconds
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Append another clip's samples. The other clip's rate is assumed to
    /// match; capture feeds are single-source so rates never mix.
    pub fn extend(&mut self, other: &AudioClip) {
        self.samples.extend_from_slice(&other.samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let clip = AudioClip::new(vec![0.0; 16_000], 16_000);
        assert!((clip.duration_secs() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_extend() {
        let mut clip = AudioClip::empty();
        assert!(clip.is_empty());

        clip.extend(&AudioClip::new(vec![0.1; 320], 16_000));
        clip.extend(&AudioClip::new(vec![0.2; 320], 16_000));
        assert_eq!(clip.len(), 640);
    }
}

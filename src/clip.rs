//! The in-memory audio representation: interleaved samples, addressable by
//! millisecond offset.
//!
//! A [`Clip`] is what the decoder produces and what the exporter consumes.
//! Slicing happens here, in whole frames, so a cut never splits a frame
//! across channels.

/// Decoded audio held in memory as interleaved `f32` samples.
#[derive(Debug, Clone)]
pub struct Clip {
    samples: Vec<f32>,
    channels: usize,
    sample_rate: u32,
}

impl Clip {
    /// Wrap raw interleaved samples.
    ///
    /// `samples.len()` is expected to be a multiple of `channels`, and both
    /// `channels` and `sample_rate` must be non-zero. The decoder guarantees
    /// this for anything it hands out; other callers get the violation
    /// reported here rather than as a division panic in a distant accessor.
    ///
    /// # Panics
    ///
    /// Panics if `channels` or `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, channels: usize, sample_rate: u32) -> Self {
        assert!(channels > 0, "a clip needs at least one channel");
        assert!(sample_rate > 0, "a clip needs a non-zero sample rate");

        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    /// A mono clip of silence, mostly useful for generating test fixtures.
    pub fn silent(duration_ms: u64, sample_rate: u32) -> Self {
        let frames = (duration_ms * u64::from(sample_rate) / 1000) as usize;
        Self {
            samples: vec![0.0; frames],
            channels: 1,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Playable duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames() as u64 * 1000 / u64::from(self.sample_rate)
    }

    /// Cut out `[start_ms, end_ms)`.
    ///
    /// `None` at either end means "unbounded" on that side. Offsets past the
    /// end of the clip clamp to it, and an inverted range (`start > end`)
    /// yields an empty clip rather than an error, matching slice semantics.
    pub fn slice(&self, start_ms: Option<u64>, end_ms: Option<u64>) -> Clip {
        let start = start_ms.map_or(0, |ms| self.frame_at(ms));
        let end = end_ms.map_or(self.frames(), |ms| self.frame_at(ms));

        let samples = if start < end {
            self.samples[start * self.channels..end * self.channels].to_vec()
        } else {
            Vec::new()
        };

        Clip {
            samples,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    /// Frame index for a millisecond offset, clamped to the clip length.
    fn frame_at(&self, ms: u64) -> usize {
        let frame = ms.saturating_mul(u64::from(self.sample_rate)) / 1000;
        (frame as usize).min(self.frames())
    }
}

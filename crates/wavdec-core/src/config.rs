//! Decoder configuration.

/// Default output capacity in `f32` slots: 4 Mi samples (16 MiB).
///
/// Counts interleaved samples, so a stereo file fits up to 2 Mi frames.
pub const DEFAULT_CAPACITY: usize = 4 * 1024 * 1024;

/// Configuration for owned and per-call decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum number of interleaved samples a single decode may produce.
    pub capacity: usize,
}

impl DecoderConfig {
    /// Create a config with the given sample capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

//! Owned, fixed-capacity decode arena.

use crate::config::DecoderConfig;
use crate::decoder::decode_into;
use crate::error::Result;
use crate::format::WavFormat;

/// A preallocated output region reused across decodes.
///
/// The arena is allocated once and never grows. Each call to
/// [`DecodeBuffer::decode`] overwrites it from offset 0 and returns a view
/// that borrows the arena, so a previous result cannot be read after the next
/// decode starts.
pub struct DecodeBuffer {
    samples: Box<[f32]>,
}

impl DecodeBuffer {
    /// Allocate an arena holding `capacity` interleaved samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: vec![0.0; capacity].into_boxed_slice(),
        }
    }

    /// Allocate an arena sized by `config.capacity`.
    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Number of `f32` slots in the arena.
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Decode `bytes` into the arena.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<DecodedAudio<'_>> {
        let format = decode_into(bytes, &mut self.samples)?;
        let len = format.required_samples() as usize;
        Ok(DecodedAudio {
            format,
            samples: &self.samples[..len],
        })
    }
}

impl Default for DecodeBuffer {
    fn default() -> Self {
        Self::from_config(&DecoderConfig::default())
    }
}

/// The result of one decode, borrowed from a [`DecodeBuffer`].
#[derive(Debug, Clone, Copy)]
pub struct DecodedAudio<'a> {
    format: WavFormat,
    samples: &'a [f32],
}

impl<'a> DecodedAudio<'a> {
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// All samples, interleaved by channel.
    pub fn samples(&self) -> &'a [f32] {
        self.samples
    }

    /// Frame `index` (one sample per channel), or `None` past the end.
    pub fn frame(&self, index: usize) -> Option<&'a [f32]> {
        let channels = usize::from(self.format.channels);
        let start = index.checked_mul(channels)?;
        let end = start.checked_add(channels)?;
        let samples = self.samples;
        samples.get(start..end)
    }

    /// De-interleaved samples of a single channel.
    ///
    /// Yields nothing when `channel` is out of range.
    pub fn channel(&self, channel: usize) -> impl Iterator<Item = f32> + 'a {
        let channels = usize::from(self.format.channels).max(1);
        let all = self.samples;
        let samples: &'a [f32] = if channel < usize::from(self.format.channels) {
            &all[channel..]
        } else {
            &[]
        };
        samples.iter().step_by(channels).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stereo_wav(frames: &[(i16, i16)]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for &(l, r) in frames {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();
        bytes
    }

    #[test]
    fn test_default_capacity() {
        let buffer = DecodeBuffer::default();
        assert_eq!(buffer.capacity(), crate::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_decode_frames_and_channels() {
        let mut buffer = DecodeBuffer::with_capacity(64);
        let bytes = stereo_wav(&[(16384, -16384), (0, 8192)]);

        let audio = buffer.decode(&bytes).unwrap();
        assert_eq!(audio.format().frames, 2);
        assert_eq!(audio.samples(), &[0.5, -0.5, 0.0, 0.25]);
        assert_eq!(audio.frame(0), Some(&[0.5, -0.5][..]));
        assert_eq!(audio.frame(1), Some(&[0.0, 0.25][..]));
        assert_eq!(audio.frame(2), None);
        assert_eq!(audio.frame(usize::MAX), None);

        let left: Vec<f32> = audio.channel(0).collect();
        let right: Vec<f32> = audio.channel(1).collect();
        assert_eq!(left, vec![0.5, 0.0]);
        assert_eq!(right, vec![-0.5, 0.25]);
        assert_eq!(audio.channel(2).count(), 0);
    }

    #[test]
    fn test_frame_far_past_end_on_mono() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        writer.write_sample(16384i16).unwrap();
        writer.finalize().unwrap();

        let mut buffer = DecodeBuffer::with_capacity(4);
        let audio = buffer.decode(&bytes).unwrap();
        assert_eq!(audio.frame(0), Some(&[0.5][..]));
        assert_eq!(audio.frame(usize::MAX), None);
        assert_eq!(audio.frame(usize::MAX / 2), None);
    }

    #[test]
    fn test_second_decode_overwrites_first() {
        let mut buffer = DecodeBuffer::with_capacity(64);

        let long = stereo_wav(&[(16384, 16384), (16384, 16384), (16384, 16384)]);
        assert_eq!(buffer.decode(&long).unwrap().samples().len(), 6);

        let short = stereo_wav(&[(-16384, 8192)]);
        let audio = buffer.decode(&short).unwrap();
        assert_eq!(audio.samples(), &[-0.5, 0.25]);
    }

    #[test]
    fn test_decode_over_capacity() {
        let mut buffer = DecodeBuffer::with_capacity(3);
        let bytes = stereo_wav(&[(1, 1), (2, 2)]);
        assert!(buffer.decode(&bytes).is_err());
    }
}

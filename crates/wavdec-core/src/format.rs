//! WAV container metadata, read from the `fmt ` and `data` chunk headers.

use std::io::Cursor;

use crate::error::{DecodeError, Result};

/// How samples are stored in the `data` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleEncoding {
    /// Two's complement integers (8-bit is stored unsigned and re-centred).
    Int,
    /// IEEE 754 floats.
    Float,
}

impl From<hound::SampleFormat> for SampleEncoding {
    fn from(format: hound::SampleFormat) -> Self {
        match format {
            hound::SampleFormat::Int => SampleEncoding::Int,
            hound::SampleFormat::Float => SampleEncoding::Float,
        }
    }
}

/// Header-level description of a WAV buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Valid bits per sample.
    pub bits_per_sample: u16,
    /// Integer or float samples.
    pub encoding: SampleEncoding,
    /// Frames (samples per channel) declared by the `data` chunk.
    pub frames: u32,
}

impl WavFormat {
    pub(crate) fn from_reader<R: std::io::Read>(reader: &hound::WavReader<R>) -> Self {
        let spec = reader.spec();
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            encoding: spec.sample_format.into(),
            frames: reader.duration(),
        }
    }

    /// Reject bit depths the sample reader cannot unpack.
    ///
    /// Integer PCM must carry 8, 16, 24 or 32 valid bits and float PCM 32.
    /// `hound` accepts other `WAVE_FORMAT_EXTENSIBLE` headers (12 valid
    /// bits in a 16-bit container, say) and only fails on the first read.
    pub fn check_decodable(&self) -> Result<()> {
        let decodable = match self.encoding {
            SampleEncoding::Int => matches!(self.bits_per_sample, 8 | 16 | 24 | 32),
            SampleEncoding::Float => self.bits_per_sample == 32,
        };
        if decodable {
            Ok(())
        } else {
            Err(DecodeError::Unsupported(hound::Error::Unsupported))
        }
    }

    /// Interleaved samples needed to hold every frame.
    pub fn required_samples(&self) -> u64 {
        u64::from(self.frames) * u64::from(self.channels)
    }

    /// Playback length in seconds. Zero when the sample rate is zero.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        f64::from(self.frames) / f64::from(self.sample_rate)
    }
}

pub(crate) type MemReader<'a> = hound::WavReader<Cursor<&'a [u8]>>;

/// Open an in-memory WAV file and check that its samples can be decoded.
pub(crate) fn open(bytes: &[u8]) -> Result<(MemReader<'_>, WavFormat)> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let format = WavFormat::from_reader(&reader);
    format.check_decodable()?;
    Ok((reader, format))
}

/// Parse only the container headers of an in-memory WAV file.
///
/// No samples are decoded, but the bit depth is checked, so a header
/// accepted here fails [`crate::decode_into`] only on capacity or a short
/// `data` chunk.
pub fn probe(bytes: &[u8]) -> Result<WavFormat> {
    let (_, format) = open(bytes)?;
    tracing::debug!(
        channels = format.channels,
        sample_rate = format.sample_rate,
        bits = format.bits_per_sample,
        frames = format.frames,
        "probed WAV header"
    );
    Ok(format)
}

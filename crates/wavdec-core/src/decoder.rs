//! WAV decoding into interleaved `f32` PCM.
//!
//! Container parsing and sample unpacking are handled by `hound`; this module
//! bounds the output and normalizes every supported encoding to `[-1.0, 1.0)`:
//!
//! | encoding            | conversion          |
//! |---------------------|---------------------|
//! | 8-bit unsigned int  | `(x - 128) / 128`   |
//! | 16/24/32-bit int    | `x / 2^(bits - 1)`  |
//! | 32-bit float        | unchanged           |

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};
use crate::format::{open, MemReader, SampleEncoding, WavFormat};

/// Decode an in-memory WAV file into `out`, starting at offset 0.
///
/// The capacity is `out.len()`. Files that need more interleaved samples are
/// rejected with [`DecodeError::TooLarge`] before anything is written. On
/// success exactly `format.required_samples()` samples at the front of `out` are
/// overwritten; the rest of `out` is left as it was.
///
/// On [`DecodeError::Truncated`] the front of `out` may hold a partial result.
pub fn decode_into(bytes: &[u8], out: &mut [f32]) -> Result<WavFormat> {
    let (mut reader, format) = open(bytes)?;
    let len = check_capacity(&format, out.len())?;
    read_samples(&mut reader, &format, &mut out[..len])?;
    log_decoded(&format);
    Ok(format)
}

/// Decode an in-memory WAV file into a freshly allocated buffer.
///
/// The allocation is sized to the file, bounded by `config.capacity`.
pub fn decode_to_vec(bytes: &[u8], config: &DecoderConfig) -> Result<(WavFormat, Vec<f32>)> {
    let (mut reader, format) = open(bytes)?;
    let len = check_capacity(&format, config.capacity)?;
    let mut samples = vec![0.0_f32; len];
    read_samples(&mut reader, &format, &mut samples)?;
    log_decoded(&format);
    Ok((format, samples))
}

fn check_capacity(format: &WavFormat, capacity: usize) -> Result<usize> {
    let required = format.required_samples();
    match usize::try_from(required) {
        Ok(len) if len <= capacity => Ok(len),
        _ => {
            tracing::warn!(
                required,
                capacity,
                channels = format.channels,
                frames = format.frames,
                "WAV exceeds output capacity"
            );
            Err(DecodeError::TooLarge { required, capacity })
        }
    }
}

fn read_samples(reader: &mut MemReader<'_>, format: &WavFormat, dest: &mut [f32]) -> Result<()> {
    match format.encoding {
        SampleEncoding::Int => {
            let scale = int_scale(format.bits_per_sample)?;
            fill(dest, reader.samples::<i32>(), |s: i32| s as f32 * scale)
        }
        SampleEncoding::Float => fill(dest, reader.samples::<f32>(), |s: f32| s),
    }
}

/// Reciprocal of full scale for a signed integer of `bits` bits.
fn int_scale(bits: u16) -> Result<f32> {
    if !(1..=32).contains(&bits) {
        return Err(DecodeError::Unsupported(hound::Error::Unsupported));
    }
    Ok(1.0 / (1u64 << (bits - 1)) as f32)
}

fn fill<S, I, F>(dest: &mut [f32], mut samples: I, convert: F) -> Result<()>
where
    I: Iterator<Item = hound::Result<S>>,
    F: Fn(S) -> f32,
{
    for (index, slot) in dest.iter_mut().enumerate() {
        match samples.next() {
            Some(Ok(sample)) => *slot = convert(sample),
            Some(Err(source @ hound::Error::IoError(_))) => {
                return Err(DecodeError::Truncated { index, source })
            }
            Some(Err(source)) => return Err(DecodeError::from(source)),
            None => {
                return Err(DecodeError::Truncated {
                    index,
                    source: hound::Error::FormatError("data chunk shorter than declared"),
                })
            }
        }
    }
    Ok(())
}

fn log_decoded(format: &WavFormat) {
    tracing::debug!(
        channels = format.channels,
        sample_rate = format.sample_rate,
        bits = format.bits_per_sample,
        frames = format.frames,
        "decoded WAV"
    );
}

//! C ABI bindings for the wavdec WAV decoder.
//!
//! Built as a `cdylib` for `wasm32-unknown-unknown` (or any C host), this
//! crate exports one decode entry point plus a few helpers:
//!
//! - [`decode_wav`] — decode a WAV buffer into the static output region
//! - [`wav_probe`] — read header info without decoding
//! - [`wav_last_error`] — why the last [`decode_wav`] returned null
//! - [`wav_output_capacity`] / [`wav_decoder_version`]
//! - [`wav_alloc`] / [`wav_free`] — stage input bytes in linear memory
//!
//! # Safety
//!
//! All functions in this module use raw pointers and are `unsafe` by nature
//! of the C FFI. Callers must ensure that:
//! - Pointers are valid for the stated sizes
//! - Only one [`decode_wav`] runs at a time
//! - Decoded samples are copied out before the next [`decode_wav`]

pub mod memory;
pub mod output;

use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::atomic::{AtomicI32, Ordering};

use wavdec_core::{DecodeError, SampleEncoding};

pub use memory::{wav_alloc, wav_free};
pub use output::OUTPUT_CAPACITY;

use output::OUTPUT;

/// Result codes returned by, or recorded for, FFI functions.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer argument.
    NullPointer = -1,
    /// Not a well-formed RIFF/WAVE container.
    FormatError = -2,
    /// Well-formed container with an encoding that cannot be decoded.
    UnsupportedFormat = -3,
    /// Decoded samples would not fit in the output region.
    TooLarge = -4,
    /// The `data` chunk is shorter than its header declares.
    TruncatedData = -5,
}

impl From<&DecodeError> for WavResult {
    fn from(err: &DecodeError) -> Self {
        match err {
            DecodeError::Malformed(_) => WavResult::FormatError,
            DecodeError::Unsupported(_) => WavResult::UnsupportedFormat,
            DecodeError::TooLarge { .. } => WavResult::TooLarge,
            DecodeError::Truncated { .. } => WavResult::TruncatedData,
        }
    }
}

/// Header information about a WAV buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Valid bits per sample.
    pub bits_per_sample: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Frames (samples per channel).
    pub frame_count: u32,
    /// 0 = integer PCM, 1 = IEEE float.
    pub sample_format: u8,
}

static LAST_RESULT: AtomicI32 = AtomicI32::new(WavResult::Ok as i32);

fn record(result: WavResult) {
    LAST_RESULT.store(result as i32, Ordering::Relaxed);
}

// ─────────────────────────── Core API ───────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library.
/// Do NOT free the returned string.
#[no_mangle]
pub extern "C" fn wav_decoder_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Capacity of the output region in interleaved `f32` samples.
#[no_mangle]
pub extern "C" fn wav_output_capacity() -> usize {
    OUTPUT_CAPACITY
}

/// [`WavResult`] code of the most recent [`decode_wav`] call.
#[no_mangle]
pub extern "C" fn wav_last_error() -> i32 {
    LAST_RESULT.load(Ordering::Relaxed)
}

/// Decode a WAV file held in memory.
///
/// On success, writes the frame count (samples per channel) to
/// `out_sample_count` and the channel count to `out_channels`, and returns
/// the address of the output region holding
/// `sample_count * channels` interleaved `f32` samples. The address is the
/// same on every call; the next call overwrites its contents.
///
/// On failure returns null, leaves both output slots untouched and records
/// the reason for [`wav_last_error`]. Inputs needing more than
/// [`OUTPUT_CAPACITY`] samples are rejected before anything is written.
///
/// # Safety
///
/// `buffer` must point to `size` readable bytes. `out_sample_count` and
/// `out_channels` must be valid for writes. No other `decode_wav` may run
/// concurrently, and no previously returned samples may be read while this
/// call is in progress.
#[no_mangle]
pub unsafe extern "C" fn decode_wav(
    buffer: *const u8,
    size: usize,
    out_sample_count: *mut c_int,
    out_channels: *mut c_int,
) -> *mut f32 {
    if buffer.is_null() || out_sample_count.is_null() || out_channels.is_null() {
        record(WavResult::NullPointer);
        return ptr::null_mut();
    }

    let input = unsafe { std::slice::from_raw_parts(buffer, size) };
    let output = unsafe { OUTPUT.as_mut_slice() };

    match wavdec_core::decode_into(input, output) {
        Ok(format) => {
            // Both fit: frames * channels <= OUTPUT_CAPACITY < c_int::MAX.
            unsafe {
                *out_sample_count = format.frames as c_int;
                *out_channels = c_int::from(format.channels);
            }
            record(WavResult::Ok);
            OUTPUT.as_ptr()
        }
        Err(err) => {
            tracing::debug!(size, error = %err, "decode_wav failed");
            record(WavResult::from(&err));
            ptr::null_mut()
        }
    }
}

/// Read the header of a WAV buffer without decoding samples.
///
/// Writes into `info` and returns [`WavResult::Ok`] on success. Bit depths
/// [`decode_wav`] cannot unpack (a 12-bit extensible file, 64-bit floats)
/// return [`WavResult::UnsupportedFormat`] here too, so only capacity and
/// a short `data` chunk can still fail the decode. Does not touch the
/// output region or the last-error slot.
///
/// # Safety
///
/// `buffer` must point to `size` readable bytes and `info` must be valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn wav_probe(buffer: *const u8, size: usize, info: *mut WavInfo) -> WavResult {
    if buffer.is_null() || info.is_null() {
        return WavResult::NullPointer;
    }

    let input = unsafe { std::slice::from_raw_parts(buffer, size) };
    match wavdec_core::probe(input) {
        Ok(format) => {
            unsafe {
                (*info).channels = format.channels;
                (*info).bits_per_sample = format.bits_per_sample;
                (*info).sample_rate = format.sample_rate;
                (*info).frame_count = format.frames;
                (*info).sample_format = match format.encoding {
                    SampleEncoding::Int => 0,
                    SampleEncoding::Float => 1,
                };
            }
            WavResult::Ok
        }
        Err(err) => WavResult::from(&err),
    }
}

//! # wavdec-core
//!
//! In-memory WAV decoding to interleaved 32-bit float PCM.
//!
//! Container parsing is delegated to `hound`. This crate adds a hard output
//! capacity, float normalization and three ways to own the output:
//! - [`decode_into`] — caller-provided slice
//! - [`DecodeBuffer`] — owned arena reused across decodes
//! - [`decode_to_vec`] — one allocation per call
//!
//! ## Example
//! ```rust,no_run
//! use wavdec_core::DecodeBuffer;
//!
//! let bytes = std::fs::read("note.wav").unwrap();
//! let mut buffer = DecodeBuffer::default();
//! let audio = buffer.decode(&bytes).unwrap();
//! println!("{} frames x {} channels", audio.format().frames, audio.format().channels);
//! ```

pub mod buffer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod format;

pub use buffer::{DecodeBuffer, DecodedAudio};
pub use config::{DecoderConfig, DEFAULT_CAPACITY};
pub use decoder::{decode_into, decode_to_vec};
pub use error::DecodeError;
pub use format::{probe, SampleEncoding, WavFormat};

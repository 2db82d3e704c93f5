//! Error types for the wavdec core crate.

use thiserror::Error;

/// Errors that can occur while probing or decoding a WAV buffer.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed WAV container: {0}")]
    Malformed(#[source] hound::Error),

    #[error("Unsupported WAV encoding: {0}")]
    Unsupported(#[source] hound::Error),

    #[error("Decoded audio too large: needs {required} samples, capacity is {capacity}")]
    TooLarge { required: u64, capacity: usize },

    #[error("Data chunk ended at sample {index}: {source}")]
    Truncated {
        index: usize,
        #[source]
        source: hound::Error,
    },
}

impl From<hound::Error> for DecodeError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::Unsupported
            | hound::Error::TooWide
            | hound::Error::InvalidSampleFormat => DecodeError::Unsupported(err),
            _ => DecodeError::Malformed(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

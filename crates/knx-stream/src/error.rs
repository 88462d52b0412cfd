use knx_core::DecodeError;
use std::io;
use thiserror::Error;

/// Errors from reading or writing a TPDU over an octet stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O failure reported by the source or sink, passed through unchanged.
    /// A clean end of stream before the header is `TruncatedInput` instead.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The stream ended before a header octet arrived. Retry once more
    /// bytes are available.
    #[error("stream ended before the TPDU header")]
    TruncatedInput,
    /// A data packet header had no continuation octet behind it.
    #[error("data segment of the TPDU is too short")]
    DataUnitTooShort,
}

impl From<DecodeError> for StreamError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::TruncatedInput => Self::TruncatedInput,
            DecodeError::DataUnitTooShort => Self::DataUnitTooShort,
        }
    }
}

/// Maps a failed header read. A clean end of stream is a truncation the
/// caller may retry once more bytes arrive; anything else is an I/O failure.
pub(crate) fn header_read_error(err: io::Error) -> StreamError {
    log::debug!("tpdu header read failed: {err}");
    match err.kind() {
        io::ErrorKind::UnexpectedEof => StreamError::TruncatedInput,
        _ => StreamError::Io(err),
    }
}

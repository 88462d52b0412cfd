use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// The destination buffer cannot hold the whole encoded TPDU.
    BufferTooSmall,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => f.write_str("buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Not enough input for the header byte.
    TruncatedInput,
    /// A data packet header was not followed by its continuation byte.
    DataUnitTooShort,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput => f.write_str("unexpected end of input"),
            Self::DataUnitTooShort => f.write_str("data segment of the TPDU is too short"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::{DecodeError, EncodeError};
    use std::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            DecodeError::TruncatedInput.to_string(),
            "unexpected end of input"
        );
        assert_eq!(
            DecodeError::DataUnitTooShort.to_string(),
            "data segment of the TPDU is too short"
        );
        assert_eq!(EncodeError::BufferTooSmall.to_string(), "buffer too small");
    }
}

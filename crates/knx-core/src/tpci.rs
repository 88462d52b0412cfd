//! Transport-layer protocol control information (TPCI).
//!
//! The first octet of every TPDU is laid out as:
//!
//! ```text
//! bit:   7 6 | 5 4 3 2 | 1 0
//! field: PT  |  SEQ    | control (control packets) or APCI high bits (data packets)
//! ```

const KIND_SHIFT: u8 = 6;
const KIND_MASK: u8 = 0b11;
const SEQ_SHIFT: u8 = 2;
/// Largest value the 4-bit sequence number field can hold.
pub const SEQ_MAX: u8 = 0b1111;
/// Largest value the 2-bit low field (control bits or APCI high bits) can hold.
pub const LOW_MAX: u8 = 0b11;

/// The packet type carried in the top two bits of the TPDU header.
///
/// The four variants cover the whole 2-bit field, so conversion from raw
/// bits is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketKind {
    UnnumberedData = 0,
    NumberedData = 1,
    UnnumberedControl = 2,
    NumberedControl = 3,
}

impl PacketKind {
    /// Interprets the low two bits of `value`; higher bits are ignored.
    pub const fn from_u8(value: u8) -> Self {
        match value & KIND_MASK {
            0 => Self::UnnumberedData,
            1 => Self::NumberedData,
            2 => Self::UnnumberedControl,
            _ => Self::NumberedControl,
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Control packets carry connection handshake bits and no application data.
    pub const fn is_control(self) -> bool {
        matches!(self, Self::UnnumberedControl | Self::NumberedControl)
    }

    pub const fn is_data(self) -> bool {
        !self.is_control()
    }

    /// Numbered packets give meaning to the sequence number field.
    pub const fn is_numbered(self) -> bool {
        matches!(self, Self::NumberedData | Self::NumberedControl)
    }
}

/// Composes a header octet. Every field is masked to its width.
pub const fn encode_header(kind: PacketKind, sequence_number: u8, low: u8) -> u8 {
    (kind.to_u8() << KIND_SHIFT) | ((sequence_number & SEQ_MAX) << SEQ_SHIFT) | (low & LOW_MAX)
}

/// Splits a header octet into `(kind, sequence_number, low_bits)`.
pub const fn decode_header(header: u8) -> (PacketKind, u8, u8) {
    (
        PacketKind::from_u8(header >> KIND_SHIFT),
        (header >> SEQ_SHIFT) & SEQ_MAX,
        header & LOW_MAX,
    )
}

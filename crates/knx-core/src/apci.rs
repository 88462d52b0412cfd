//! Application-layer protocol control information (APCI).
//!
//! The 4-bit service code straddles two octets: its high two bits sit in the
//! low bits of the TPDU header and its low two bits sit in the top of the
//! first continuation octet.

use core::fmt;

const CODE_MASK: u8 = 0b1111;
const HALF_MASK: u8 = 0b11;
const CONTINUATION_SHIFT: u8 = 6;
/// Bits of the first continuation octet that are not part of the service code.
pub const CONTINUATION_DATA_MASK: u8 = 0b0011_1111;

/// Application-layer service selected by a data TPDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ServiceCode {
    #[default]
    GroupValueRead = 0,
    GroupValueResponse = 1,
    GroupValueWrite = 2,
    IndividualAddrWrite = 3,
    IndividualAddrRequest = 4,
    IndividualAddrResponse = 5,
    AdcRead = 6,
    AdcResponse = 7,
    MemoryRead = 8,
    MemoryResponse = 9,
    MemoryWrite = 10,
    UserMessage = 11,
    MaskVersionRead = 12,
    MaskVersionResponse = 13,
    Restart = 14,
    Escape = 15,
}

impl ServiceCode {
    /// Interprets the low four bits of `value`; higher bits are ignored.
    pub const fn from_u8(value: u8) -> Self {
        match value & CODE_MASK {
            0 => Self::GroupValueRead,
            1 => Self::GroupValueResponse,
            2 => Self::GroupValueWrite,
            3 => Self::IndividualAddrWrite,
            4 => Self::IndividualAddrRequest,
            5 => Self::IndividualAddrResponse,
            6 => Self::AdcRead,
            7 => Self::AdcResponse,
            8 => Self::MemoryRead,
            9 => Self::MemoryResponse,
            10 => Self::MemoryWrite,
            11 => Self::UserMessage,
            12 => Self::MaskVersionRead,
            13 => Self::MaskVersionResponse,
            14 => Self::Restart,
            _ => Self::Escape,
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GroupValueRead => "GroupValueRead",
            Self::GroupValueResponse => "GroupValueResponse",
            Self::GroupValueWrite => "GroupValueWrite",
            Self::IndividualAddrWrite => "IndividualAddrWrite",
            Self::IndividualAddrRequest => "IndividualAddrRequest",
            Self::IndividualAddrResponse => "IndividualAddrResponse",
            Self::AdcRead => "AdcRead",
            Self::AdcResponse => "AdcResponse",
            Self::MemoryRead => "MemoryRead",
            Self::MemoryResponse => "MemoryResponse",
            Self::MemoryWrite => "MemoryWrite",
            Self::UserMessage => "UserMessage",
            Self::MaskVersionRead => "MaskVersionRead",
            Self::MaskVersionResponse => "MaskVersionResponse",
            Self::Restart => "Restart",
            Self::Escape => "Escape",
        }
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `(high, low)` halves: `high` goes into the header octet's low
/// bits, `low` is already shifted into the top of a continuation octet.
pub const fn split_service_code(code: ServiceCode) -> (u8, u8) {
    let raw = code.to_u8();
    (
        (raw >> 2) & HALF_MASK,
        (raw & HALF_MASK) << CONTINUATION_SHIFT,
    )
}

/// Rebuilds a service code from the header's low two bits and the first
/// continuation octet.
pub const fn join_service_code(header_low: u8, continuation: u8) -> ServiceCode {
    ServiceCode::from_u8(
        ((header_low & HALF_MASK) << 2) | ((continuation >> CONTINUATION_SHIFT) & HALF_MASK),
    )
}

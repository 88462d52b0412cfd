use clap::ValueEnum;
use knx_core::{PacketKind, ServiceCode, Tpdu};
use std::fmt::Write as _;
use thiserror::Error;

/// CLI-friendly enum for selecting the TPDU packet kind.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PacketKindArg {
    UnnumberedData,
    NumberedData,
    UnnumberedControl,
    NumberedControl,
}

impl PacketKindArg {
    pub const fn into_packet_kind(self) -> PacketKind {
        match self {
            Self::UnnumberedData => PacketKind::UnnumberedData,
            Self::NumberedData => PacketKind::NumberedData,
            Self::UnnumberedControl => PacketKind::UnnumberedControl,
            Self::NumberedControl => PacketKind::NumberedControl,
        }
    }
}

/// CLI-friendly enum for selecting the application service code.
///
/// Maps kebab-case names to [`ServiceCode`] variants for clap argument parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ServiceCodeArg {
    GroupValueRead,
    GroupValueResponse,
    GroupValueWrite,
    IndividualAddrWrite,
    IndividualAddrRequest,
    IndividualAddrResponse,
    AdcRead,
    AdcResponse,
    MemoryRead,
    MemoryResponse,
    MemoryWrite,
    UserMessage,
    MaskVersionRead,
    MaskVersionResponse,
    Restart,
    Escape,
}

impl ServiceCodeArg {
    pub const fn into_service_code(self) -> ServiceCode {
        match self {
            Self::GroupValueRead => ServiceCode::GroupValueRead,
            Self::GroupValueResponse => ServiceCode::GroupValueResponse,
            Self::GroupValueWrite => ServiceCode::GroupValueWrite,
            Self::IndividualAddrWrite => ServiceCode::IndividualAddrWrite,
            Self::IndividualAddrRequest => ServiceCode::IndividualAddrRequest,
            Self::IndividualAddrResponse => ServiceCode::IndividualAddrResponse,
            Self::AdcRead => ServiceCode::AdcRead,
            Self::AdcResponse => ServiceCode::AdcResponse,
            Self::MemoryRead => ServiceCode::MemoryRead,
            Self::MemoryResponse => ServiceCode::MemoryResponse,
            Self::MemoryWrite => ServiceCode::MemoryWrite,
            Self::UserMessage => ServiceCode::UserMessage,
            Self::MaskVersionRead => ServiceCode::MaskVersionRead,
            Self::MaskVersionResponse => ServiceCode::MaskVersionResponse,
            Self::Restart => ServiceCode::Restart,
            Self::Escape => ServiceCode::Escape,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("invalid hex token '{0}'")]
    InvalidDigit(String),
    #[error("hex token '{0}' has an odd number of digits")]
    OddLength(String),
}

/// Parses octets written as hex, e.g. `["0x4A", "01", "0060"]`.
///
/// Tokens may carry a `0x` prefix and may pack several octets back to back.
pub fn parse_hex<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>, HexError> {
    let mut out = Vec::new();
    for token in tokens.iter().flat_map(|t| t.as_ref().split_whitespace()) {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexError::InvalidDigit(token.to_string()));
        }
        if digits.len() == 1 {
            out.push(parse_octet(token, digits)?);
            continue;
        }
        if digits.is_empty() || digits.len() % 2 != 0 {
            return Err(HexError::OddLength(token.to_string()));
        }
        for i in (0..digits.len()).step_by(2) {
            out.push(parse_octet(token, &digits[i..i + 2])?);
        }
    }
    Ok(out)
}

fn parse_octet(token: &str, digits: &str) -> Result<u8, HexError> {
    u8::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit(token.to_string()))
}

pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// One-line human-readable summary of a TPDU.
pub fn describe(tpdu: &Tpdu) -> String {
    if tpdu.packet_kind.is_control() {
        format!(
            "{:?} seq={} control={}",
            tpdu.packet_kind, tpdu.sequence_number, tpdu.control
        )
    } else {
        format!(
            "{:?} seq={} service={} payload=[{}]",
            tpdu.packet_kind,
            tpdu.sequence_number,
            tpdu.service_code,
            format_hex(&tpdu.payload)
        )
    }
}

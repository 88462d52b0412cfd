//! The transport-layer protocol data unit carried by an `L_Data` frame.
//!
//! # Payload framing
//!
//! Data packets always carry at least one continuation octet after the
//! header. Its top two bits hold the low half of the [`ServiceCode`]:
//!
//! - with exactly one continuation octet, its low six bits *are* the payload
//!   (the short format, values `0..=63`);
//! - with more octets, the first continuation octet is padding and the
//!   payload is everything after it (the long format).
//!
//! # Encode/decode asymmetry
//!
//! [`Tpdu::encode`] writes `payload[0]` into the continuation octet, but
//! [`Tpdu::decode`] discards that octet in the long format. Senders building
//! a long-format TPDU must therefore put a padding byte in front of the real
//! application data. Consequently:
//!
//! - an empty payload encodes as a single zero continuation and decodes back
//!   as `[0]`;
//! - a payload of two or more bytes decodes back without its first byte.

use alloc::vec;
use alloc::vec::Vec;

use crate::apci::{join_service_code, split_service_code, ServiceCode, CONTINUATION_DATA_MASK};
use crate::encoding::{reader::Reader, writer::Writer};
use crate::tpci::{decode_header, encode_header, PacketKind};
use crate::{DecodeError, EncodeError};

/// Control bits of a `T_Connect` packet.
pub const CONTROL_CONNECT: u8 = 0b00;
/// Control bits of a `T_Disconnect` packet.
pub const CONTROL_DISCONNECT: u8 = 0b01;
/// Control bits of a `T_ACK` packet.
pub const CONTROL_ACK: u8 = 0b10;
/// Control bits of a `T_NAK` packet.
pub const CONTROL_NACK: u8 = 0b11;

/// Wire shape of a data packet's payload, derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// No payload; encodes as a zeroed continuation octet.
    Empty,
    /// One byte folded into the continuation octet's low six bits.
    Short,
    /// Padding byte followed by the application data.
    Long,
}

impl PayloadFormat {
    /// Classifies a payload of `len` bytes.
    pub const fn for_len(len: usize) -> Self {
        match len {
            0 => Self::Empty,
            1 => Self::Short,
            _ => Self::Long,
        }
    }
}

/// A decoded or to-be-encoded TPDU.
///
/// Which fields matter depends on [`packet_kind`](Self::packet_kind):
/// control packets use `control`, data packets use `service_code` and
/// `payload`. Inactive fields are ignored on encode and zeroed on decode.
/// Out-of-range `sequence_number` and `control` values are masked to their
/// bit widths on encode rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tpdu {
    pub packet_kind: PacketKind,
    pub sequence_number: u8,
    pub control: u8,
    pub service_code: ServiceCode,
    pub payload: Vec<u8>,
}

impl Tpdu {
    /// Control packet. `service_code` and `payload` are left at their
    /// defaults and ignored on encode. Pass a control kind; a data kind makes
    /// this an empty data packet.
    pub const fn control(packet_kind: PacketKind, sequence_number: u8, control: u8) -> Self {
        Self {
            packet_kind,
            sequence_number,
            control,
            service_code: ServiceCode::GroupValueRead,
            payload: Vec::new(),
        }
    }

    /// Data packet. `control` is zero and ignored on encode. A payload of
    /// two or more bytes starts with the padding octet (see module docs).
    pub fn data(
        packet_kind: PacketKind,
        sequence_number: u8,
        service_code: ServiceCode,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            packet_kind,
            sequence_number,
            control: 0,
            service_code,
            payload: payload.into(),
        }
    }

    /// `T_Connect`: unnumbered control, sequence 0.
    pub fn connect() -> Self {
        Self::control(PacketKind::UnnumberedControl, 0, CONTROL_CONNECT)
    }

    /// `T_Disconnect`: unnumbered control, sequence 0.
    pub fn disconnect() -> Self {
        Self::control(PacketKind::UnnumberedControl, 0, CONTROL_DISCONNECT)
    }

    /// `T_ACK` for the numbered packet `sequence_number`.
    pub fn ack(sequence_number: u8) -> Self {
        Self::control(PacketKind::NumberedControl, sequence_number, CONTROL_ACK)
    }

    /// `T_NAK` for the numbered packet `sequence_number`.
    pub fn nack(sequence_number: u8) -> Self {
        Self::control(PacketKind::NumberedControl, sequence_number, CONTROL_NACK)
    }

    /// Unnumbered `GroupValueRead` with an empty payload.
    pub fn group_value_read() -> Self {
        Self::data(
            PacketKind::UnnumberedData,
            0,
            ServiceCode::GroupValueRead,
            Vec::new(),
        )
    }

    /// Group write. Follows the payload framing rules in the module docs, so
    /// long-format values need a leading padding byte.
    pub fn group_value_write(payload: impl Into<Vec<u8>>) -> Self {
        Self::data(
            PacketKind::UnnumberedData,
            0,
            ServiceCode::GroupValueWrite,
            payload,
        )
    }

    /// Unnumbered `GroupValueResponse`; same payload framing as writes.
    pub fn group_value_response(payload: impl Into<Vec<u8>>) -> Self {
        Self::data(
            PacketKind::UnnumberedData,
            0,
            ServiceCode::GroupValueResponse,
            payload,
        )
    }

    /// Wire shape `payload` will be encoded in.
    pub fn payload_format(&self) -> PayloadFormat {
        PayloadFormat::for_len(self.payload.len())
    }

    /// Decodes a TPDU from `r`.
    ///
    /// Control packets consume only the header octet. Data packets consume
    /// everything left in the reader.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let (packet_kind, sequence_number, low) = decode_header(r.read_u8()?);

        match packet_kind {
            PacketKind::UnnumberedControl | PacketKind::NumberedControl => {
                Ok(Self::control(packet_kind, sequence_number, low))
            }
            PacketKind::UnnumberedData | PacketKind::NumberedData => {
                let (&continuation, rest) = r
                    .read_rest()
                    .split_first()
                    .ok_or(DecodeError::DataUnitTooShort)?;
                let payload = if rest.is_empty() {
                    vec![continuation & CONTINUATION_DATA_MASK]
                } else {
                    rest.to_vec()
                };
                Ok(Self {
                    packet_kind,
                    sequence_number,
                    control: 0,
                    service_code: join_service_code(low, continuation),
                    payload,
                })
            }
        }
    }

    /// Decodes a TPDU that starts at `bytes[0]`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(&mut Reader::new(bytes))
    }

    /// Encodes into `w`. Nothing is written unless the whole TPDU fits.
    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        let (head, head_len, tail) = self.wire_parts();
        if w.remaining() < head_len + tail.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        w.write_all(&head[..head_len])?;
        w.write_all(tail)
    }

    /// Number of octets [`encode`](Self::encode) will write.
    pub fn encoded_len(&self) -> usize {
        let (_, head_len, tail) = self.wire_parts();
        head_len + tail.len()
    }

    /// Encodes into a freshly allocated buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        let (head, head_len, tail) = self.wire_parts();
        let mut out = Vec::with_capacity(head_len + tail.len());
        out.extend_from_slice(&head[..head_len]);
        out.extend_from_slice(tail);
        out
    }

    /// Leading octets built from fields (header, plus the continuation for
    /// data packets) and the payload bytes that follow them verbatim.
    fn wire_parts(&self) -> ([u8; 2], usize, &[u8]) {
        match self.packet_kind {
            PacketKind::UnnumberedControl | PacketKind::NumberedControl => {
                let header = encode_header(self.packet_kind, self.sequence_number, self.control);
                ([header, 0], 1, &[] as &[u8])
            }
            PacketKind::UnnumberedData | PacketKind::NumberedData => {
                let (code_high, code_low) = split_service_code(self.service_code);
                let header = encode_header(self.packet_kind, self.sequence_number, code_high);
                match self.payload.split_first() {
                    Some((&first, rest)) => {
                        ([header, (first & CONTINUATION_DATA_MASK) | code_low], 2, rest)
                    }
                    None => ([header, code_low], 2, &[] as &[u8]),
                }
            }
        }
    }
}

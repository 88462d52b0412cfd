//! Blocking adapters over [`std::io::Read`] and [`std::io::Write`].

use crate::error::{header_read_error, StreamError};
use knx_core::tpci::decode_header;
use knx_core::Tpdu;
use std::io::{Read, Write};

/// Reads one TPDU from `source`.
///
/// A control packet consumes exactly its header octet. A data packet owns
/// the rest of the frame, so everything up to end of stream is read.
pub fn read_tpdu<R: Read + ?Sized>(source: &mut R) -> Result<Tpdu, StreamError> {
    let mut header = [0u8; 1];
    source.read_exact(&mut header).map_err(header_read_error)?;

    let mut frame = header.to_vec();
    let (kind, _, _) = decode_header(header[0]);
    if kind.is_data() {
        source.read_to_end(&mut frame)?;
    }

    let tpdu = Tpdu::from_bytes(&frame)?;
    log::trace!("decoded tpdu from {} octets: {tpdu:?}", frame.len());
    Ok(tpdu)
}

/// Encodes `tpdu` and hands the whole frame to `sink` in one `write_all`.
pub fn write_tpdu<W: Write + ?Sized>(sink: &mut W, tpdu: &Tpdu) -> Result<(), StreamError> {
    let frame = tpdu.to_vec();
    sink.write_all(&frame)?;
    log::trace!("encoded tpdu into {} octets: {tpdu:?}", frame.len());
    Ok(())
}

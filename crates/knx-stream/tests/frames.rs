use knx_core::{PacketKind, ServiceCode, Tpdu};
use knx_stream::{read_tpdu, write_tpdu, StreamError};
use std::io::Cursor;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Frames as an `L_Data` layer would hand them over, one buffer each.
const FRAMES: &[&[u8]] = &[
    &[0x80],
    &[0x42, 0x00, 0x01, 0x10, 0x00],
    &[0xC2],
    &[0x00, 0x81],
    &[0x81],
];

#[test]
fn connection_oriented_exchange_decodes_frame_by_frame() {
    init_logging();
    let decoded = FRAMES
        .iter()
        .map(|frame| read_tpdu(&mut Cursor::new(*frame)))
        .collect::<Result<Vec<_>, StreamError>>()
        .unwrap();

    assert_eq!(decoded[0], Tpdu::connect());
    assert_eq!(decoded[1].packet_kind, PacketKind::NumberedData);
    assert_eq!(decoded[1].sequence_number, 0);
    assert_eq!(decoded[1].service_code, ServiceCode::MemoryRead);
    assert_eq!(decoded[1].payload, vec![0x01, 0x10, 0x00]);
    assert_eq!(decoded[2], Tpdu::ack(0));
    assert_eq!(decoded[3], Tpdu::group_value_write([0x01u8]));
    assert_eq!(decoded[4], Tpdu::disconnect());
}

#[test]
fn written_frames_match_the_wire() {
    init_logging();
    for frame in [FRAMES[0], FRAMES[2], FRAMES[3], FRAMES[4]] {
        let tpdu = read_tpdu(&mut Cursor::new(frame)).unwrap();
        let mut out = Vec::new();
        write_tpdu(&mut out, &tpdu).unwrap();
        assert_eq!(out, frame);
    }
}

#[test]
fn long_frame_rewrite_drops_padding_octet() {
    init_logging();
    let tpdu = read_tpdu(&mut Cursor::new(FRAMES[1])).unwrap();
    let mut out = Vec::new();
    write_tpdu(&mut out, &tpdu).unwrap();
    // The decoded payload's first byte becomes the new padding octet.
    assert_eq!(out, vec![0x42, 0x01, 0x10, 0x00]);
}

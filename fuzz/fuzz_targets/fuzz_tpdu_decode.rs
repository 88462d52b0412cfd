#![no_main]

use knx_core::Tpdu;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tpdu) = Tpdu::from_bytes(data) {
        let encoded = tpdu.to_vec();
        assert_eq!(encoded.len(), tpdu.encoded_len());
        assert_eq!(encoded[0], data[0]);
        let again = Tpdu::from_bytes(&encoded).expect("re-encoded TPDU must decode");
        assert_eq!(again.packet_kind, tpdu.packet_kind);
        assert_eq!(again.service_code, tpdu.service_code);
    }
});

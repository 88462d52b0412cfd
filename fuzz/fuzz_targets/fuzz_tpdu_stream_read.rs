#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let _ = knx_stream::read_tpdu(&mut Cursor::new(data));
});

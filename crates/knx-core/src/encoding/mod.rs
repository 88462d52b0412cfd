/// Zero-copy byte reader for decoding TPDUs.
pub mod reader;
/// Byte writer for encoding TPDUs into a caller-owned buffer.
pub mod writer;

pub use reader::Reader;
pub use writer::Writer;

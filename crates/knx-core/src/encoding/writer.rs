use crate::EncodeError;

/// Appends octets to a caller-owned buffer, refusing any write that would
/// not fit in full.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        if self.remaining() < data.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        let end = self.pos + data.len();
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::EncodeError;

    #[test]
    fn frames_accumulate() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        w.write_all(&[0x80]).unwrap();
        w.write_all(&[0x00, 0x81]).unwrap();
        assert_eq!(w.as_written(), &[0x80, 0x00, 0x81]);
        assert_eq!(w.position(), 3);
        assert_eq!(w.remaining(), 1);
    }

    #[test]
    fn oversized_write_leaves_buffer_untouched() {
        let mut buf = [0u8; 2];
        let mut w = Writer::new(&mut buf);
        w.write_all(&[0xC6]).unwrap();
        assert_eq!(
            w.write_all(&[0x00, 0x40]).unwrap_err(),
            EncodeError::BufferTooSmall
        );
        assert_eq!(w.as_written(), &[0xC6]);
        w.write_all(&[]).unwrap();
        assert_eq!(w.position(), 1);
    }
}

use std::io::{self, Read};

/// Tees every byte read through it into a capture buffer.
///
/// The tap borrows the underlying reader for the walk of exactly one value.
/// Dropping it (on any error path) releases the reader and discards the
/// partial capture, so nothing leaks into the next value.
pub struct CaptureReader<'a, R: ?Sized> {
    inner: &'a mut R,
    buffer: Vec<u8>,
}

impl<'a, R: Read + ?Sized> CaptureReader<'a, R> {
    /// Starts a capture seeded with `value_type`.
    pub fn attach(inner: &'a mut R, value_type: u8, capacity: usize) -> CaptureReader<'a, R> {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.push(value_type);
        CaptureReader { inner, buffer }
    }

    pub fn captured(&self) -> &[u8] {
        &self.buffer
    }

    /// Stops forwarding and hands back everything captured so far.
    pub fn detach(self) -> Vec<u8> {
        self.buffer
    }
}

impl<R: Read + ?Sized> Read for CaptureReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.buffer.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::common::{read_blob, skip};
    use std::io::Cursor;

    #[test]
    fn test_capture_records_consumed_bytes() {
        let mut cursor = Cursor::new(vec![3, b'b', b'a', b'r', 0xAA, 0xBB, 0xCC]);

        let mut tap = CaptureReader::attach(&mut cursor, 0, 16);
        assert_eq!(b"bar".to_vec(), read_blob(&mut tap).unwrap());
        skip(&mut tap, 2).unwrap();
        assert_eq!(&[0, 3, b'b', b'a', b'r', 0xAA, 0xBB], tap.captured());
        let captured = tap.detach();

        assert_eq!(7, captured.len());
        assert_eq!(6, cursor.position());
    }

    #[test]
    fn test_reads_after_detach_are_not_captured() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);

        let mut tap = CaptureReader::attach(&mut cursor, 9, 0);
        skip(&mut tap, 1).unwrap();
        let captured = tap.detach();
        skip(&mut cursor, 2).unwrap();

        assert_eq!(vec![9, 1], captured);
    }
}

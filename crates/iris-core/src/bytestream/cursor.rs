/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

/// An in memory source of bytes
///
/// Similar to [`std::io::Cursor`] but works in `no_std`
/// and never goes through `std::io` error plumbing.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }

    /// Number of bytes not yet consumed
    #[inline(always)]
    pub fn bytes_left(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let available = self.bytes_left();
        let end = self.position + buf.len();

        match self.stream.as_ref().get(self.position..end) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position = end;
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBytes(buf.len(), available))
        }
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.bytes_left() == 0)
    }
}

#[cfg(feature = "std")]
impl<T: AsRef<[u8]>> ByteReaderTrait for std::io::Cursor<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let start = self.position().min(self.get_ref().as_ref().len() as u64) as usize;
        let available = self.get_ref().as_ref().len() - start;

        if buf.len() > available {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), available));
        }
        buf.copy_from_slice(&self.get_ref().as_ref()[start..start + buf.len()]);
        self.set_position((start + buf.len()) as u64);

        Ok(())
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position() >= self.get_ref().as_ref().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteCursor, ByteIoError, ByteReaderTrait};

    #[test]
    fn short_read_keeps_position() {
        let mut cursor = ByteCursor::new([1_u8, 2, 3]);
        let mut buf = [0; 4];

        let err = cursor.read_exact_bytes(&mut buf).unwrap_err();
        assert!(matches!(err, ByteIoError::NotEnoughBytes(4, 3)));
        assert_eq!(cursor.bytes_left(), 3);
    }

    #[test]
    fn exact_reads_drain_cursor() {
        let mut cursor = ByteCursor::new(&[1_u8, 2, 3, 4][..]);
        let mut buf = [0; 3];

        cursor.read_const_bytes(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert!(!cursor.is_eof().unwrap());

        cursor.read_const_bytes(&mut [0]).unwrap();
        assert!(cursor.is_eof().unwrap());
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_cursor_behaves_like_byte_cursor() {
        let mut cursor = std::io::Cursor::new([5_u8, 6]);
        let mut buf = [0; 3];

        assert!(matches!(
            cursor.read_exact_bytes(&mut buf),
            Err(ByteIoError::NotEnoughBytes(3, 2))
        ));
        cursor.read_const_bytes(&mut [0; 2]).unwrap();
        assert!(cursor.is_eof().unwrap());
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteReaderTrait;

/// Errors raised by byte sources and sinks
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// A read needed more bytes than the source had
    ///
    /// (requested, available)
    NotEnoughBytes(usize, usize),
    /// A write needed more space than the sink had
    ///
    /// (requested, available)
    NotEnoughBuffer(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// Endian aware reader over a [`ByteReaderTrait`] source
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_const_bytes(&mut buf)?;
        Ok(buf[0])
    }
    /// Read a big endian `u32`, erroring out without consuming
    /// anything if fewer than four bytes remain
    #[inline]
    pub fn get_u32_be_err(&mut self) -> Result<u32, ByteIoError> {
        Ok(u32::from_be_bytes(self.read_fixed_bytes_or_error::<4>()?))
    }
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }
    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteCursor, ByteIoError, ByteReader};

    #[test]
    fn reads_big_endian() {
        let mut reader = ByteReader::new(ByteCursor::new([0_u8, 0, 1, 2, 9]));
        assert_eq!(reader.get_u32_be_err().unwrap(), 258);
        assert_eq!(reader.get_u8_err().unwrap(), 9);
        assert!(reader.eof().unwrap());
    }

    #[test]
    fn short_integer_read_errors() {
        let mut reader = ByteReader::new(ByteCursor::new([0_u8, 1]));
        let err = reader.get_u32_be_err().unwrap_err();
        assert!(matches!(err, ByteIoError::NotEnoughBytes(4, 2)));
        // failed read does not consume
        assert_eq!(reader.read_fixed_bytes_or_error::<2>().unwrap(), [0, 1]);
    }
}

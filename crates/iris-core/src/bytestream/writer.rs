/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteWriterTrait};

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// It keeps count of the bytes that went into the sink
pub struct ByteWriter<T: ByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Write a fixed compile time known number of bytes to the sink
    pub fn write_const_bytes<const N: usize>(&mut self, byte: &[u8; N]) -> Result<(), ByteIoError> {
        self.buffer.write_const_bytes(byte)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the sink or error out
    /// if there is not enough space
    #[inline(always)]
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Tell the sink how many bytes we are about to write
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(additional)
    }
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }
}

impl ByteWriterTrait for &mut [u8] {
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        if N > self.len() {
            return Err(ByteIoError::NotEnoughBuffer(N, self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(N);
        a.copy_from_slice(buf);
        *self = b;
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

impl ByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl ByteWriterTrait for &mut std::io::BufWriter<std::fs::File> {
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        use std::io::Write;

        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        use std::io::Write;

        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in iris
//!
//! This exposes the traits implemented by the sources and sinks
//! codecs read from and write to.

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for readers.
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor)
/// over [`Cursor`](std::io::Cursor), it avoids the `std::io` machinery on every byte.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but the size is
    /// known at compile time which lets implementations skip the bounds juggling
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;
    /// Report whether we are at the end of the stream.
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;
}

/// The writer trait implemented for encoder sinks
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write a fixed number of bytes and error out if we can't write the bytes
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint on how many bytes the encoder expects to write
    ///
    /// Sinks that can't pre-allocate should return `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Readers pull from anything implementing [`ByteReaderTrait`],
//! writers push into anything implementing [`ByteWriterTrait`].
//! Both wrappers count what went through them so codecs can
//! report precise errors.
pub use cursor::ByteCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::{ByteReaderTrait, ByteWriterTrait};
pub use writer::ByteWriter;

mod cursor;
mod reader;
mod traits;
mod writer;

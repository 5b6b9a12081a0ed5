/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use iris_core::bit_depth::BitDepth;
use iris_core::bytestream::ByteIoError;
use iris_core::colorspace::ColorSpace;

/// Broad classes of decoding failures
///
/// `InvalidHeader`, `InvalidEndMarker` and `TruncatedStream` mean the
/// input itself is not a well formed QOI image, see
/// [`QoiErrors::is_invalid_input`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QoiErrorKind {
    /// Magic bytes, channel or colorspace byte are wrong or the header is cut short
    InvalidHeader,
    /// The 8 byte trailer is missing, partial or differs
    InvalidEndMarker,
    /// The chunk stream ends before every pixel was produced or
    /// a chunk produces more pixels than the image holds
    TruncatedStream,
    /// The image is larger than the configured limits
    Limits,
    /// The caller asked for something the decoder can't do
    Usage,
    /// The underlying reader failed
    Io
}

/// Possible Errors that may occur during decoding
pub enum QoiErrors {
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The input ended before the 14 byte header was read
    TruncatedHeader,
    /// The header contains an invalid channel number
    ///
    /// The only supported types are `3` and `4`
    UnknownChannels(u8),
    /// The header contains an invalid colorspace value
    ///
    /// The should be `0` or `1`
    /// but this can be ignored if strict mode is off
    UnknownColorspace(u8),
    /// Fewer than 8 bytes follow the last chunk
    MissingEndMarker,
    /// The 8 bytes after the last chunk are not `00 00 00 00 00 00 00 01`
    InvalidEndMarker([u8; 8]),
    /// The input ran out while a chunk's payload was being read
    ///
    /// The argument is the tag byte of the chunk
    TruncatedChunk(u8),
    /// The input ran out before all pixels were decoded
    TruncatedStream {
        decoded:  usize,
        expected: usize
    },
    /// A run chunk repeats more pixels than remain in the image
    RunOverflow { run: usize, remaining: usize },
    /// Image dimensions exceed configured limits
    ///
    /// # Arguments
    /// - 1st argument is the dimension that was too large
    /// - 2nd argument is the value found in the header
    /// - 3rd argument is the configured limit
    TooLargeDimensions(&'static str, usize, usize),
    /// Too small output size
    ///
    /// (expected, found)
    TooSmallOutput(usize, usize),
    /// Decoded pixels can only be returned as RGB or RGBA
    UnsupportedOutputColorspace(ColorSpace),
    IoErrors(ByteIoError)
}

impl QoiErrors {
    /// The broad class this error falls in
    pub const fn kind(&self) -> QoiErrorKind {
        match self {
            QoiErrors::WrongMagicBytes
            | QoiErrors::TruncatedHeader
            | QoiErrors::UnknownChannels(_)
            | QoiErrors::UnknownColorspace(_) => QoiErrorKind::InvalidHeader,
            QoiErrors::MissingEndMarker | QoiErrors::InvalidEndMarker(_) => {
                QoiErrorKind::InvalidEndMarker
            }
            QoiErrors::TruncatedChunk(_)
            | QoiErrors::TruncatedStream { .. }
            | QoiErrors::RunOverflow { .. } => QoiErrorKind::TruncatedStream,
            QoiErrors::TooLargeDimensions(..) => QoiErrorKind::Limits,
            QoiErrors::TooSmallOutput(..) | QoiErrors::UnsupportedOutputColorspace(_) => {
                QoiErrorKind::Usage
            }
            QoiErrors::IoErrors(_) => QoiErrorKind::Io
        }
    }

    /// Whether the error means the input is not a well formed QOI image
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self.kind(),
            QoiErrorKind::InvalidHeader
                | QoiErrorKind::InvalidEndMarker
                | QoiErrorKind::TruncatedStream
        )
    }
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::TruncatedHeader => {
                writeln!(f, "Input ended before the 14 byte QOI header")
            }
            QoiErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiErrors::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiErrors::MissingEndMarker => {
                writeln!(f, "Input ended before the 8 byte end marker")
            }
            QoiErrors::InvalidEndMarker(found) => {
                writeln!(f, "Last bytes do not match QOI end marker, found {found:?}")
            }
            QoiErrors::TruncatedChunk(tag) => {
                writeln!(f, "Input ended inside the payload of chunk with tag {tag:#010b}")
            }
            QoiErrors::TruncatedStream { decoded, expected } => {
                writeln!(
                    f,
                    "Input ended after {decoded} pixels but the image has {expected} pixels"
                )
            }
            QoiErrors::RunOverflow { run, remaining } => {
                writeln!(
                    f,
                    "Run of {run} pixels overshoots the image, only {remaining} pixels remain"
                )
            }
            QoiErrors::TooLargeDimensions(dimension, found, limit) => {
                writeln!(
                    f,
                    "{dimension} {found} greater than max configured {dimension} {limit}"
                )
            }
            QoiErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiErrors::UnsupportedOutputColorspace(colorspace) => {
                writeln!(
                    f,
                    "Cannot decode QOI into {colorspace:?}, supported ones are RGB and RGBA"
                )
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {value:?}")
            }
        }
    }
}

impl From<ByteIoError> for QoiErrors {
    fn from(value: ByteIoError) -> Self {
        QoiErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// QOI stores 8 bit samples only
    UnsupportedBitDepth(BitDepth),
    /// Too large dimensions
    /// The dimension cannot be stored in the header's 32 bit field
    TooLargeDimensions(usize),
    /// The pixel buffer length doesn't match `width*height*channels`
    ///
    /// (expected, found)
    InputLengthMismatch(usize, usize),

    IoError(ByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into QOI, supported ones are {supported:?}")
            }
            QoiEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Cannot encode {depth:?} bit depth into QOI, only Eight is supported")
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::InputLengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} bytes of pixels from the image dimensions, but found {found}"
                )
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {v:?}")
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {}

impl From<ByteIoError> for QoiEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoError(value)
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The 14 byte header and the 8 byte end marker
//!
//! ```text
//! 0..4   magic `qoif`
//! 4..8   width, u32 big endian
//! 8..12  height, u32 big endian
//! 12     channels, 3 = RGB, 4 = RGBA
//! 13     colorspace, 0 = sRGB with linear alpha, 1 = all linear
//! ```

use iris_core::bytestream::{
    ByteCursor, ByteIoError, ByteReader, ByteReaderTrait, ByteWriter, ByteWriterTrait
};
use iris_core::colorspace::{ColorCharacteristics, ColorSpace};
use iris_core::log::{trace, warn};

use crate::constants::{QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MAGIC};
use crate::errors::QoiErrors;

/// Channel layout stored in the header
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QoiChannels {
    Rgb = 3,
    Rgba = 4
}

impl QoiChannels {
    pub const fn num_components(self) -> usize {
        self as usize
    }

    pub const fn colorspace(self) -> ColorSpace {
        match self {
            QoiChannels::Rgb => ColorSpace::RGB,
            QoiChannels::Rgba => ColorSpace::RGBA
        }
    }
}

impl TryFrom<u8> for QoiChannels {
    type Error = QoiErrors;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(QoiChannels::Rgb),
            4 => Ok(QoiChannels::Rgba),
            _ => Err(QoiErrors::UnknownChannels(value))
        }
    }
}

impl TryFrom<ColorSpace> for QoiChannels {
    /// The colorspace that has no QOI representation
    type Error = ColorSpace;

    fn try_from(value: ColorSpace) -> Result<Self, Self::Error> {
        match value {
            ColorSpace::RGB => Ok(QoiChannels::Rgb),
            ColorSpace::RGBA => Ok(QoiChannels::Rgba),
            other => Err(other)
        }
    }
}

/// How channel values are to be interpreted
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum QoiColorspace {
    /// sRGB with linear alpha
    #[default]
    sRGB = 0,
    /// All channels linear
    Linear = 1
}

impl TryFrom<u8> for QoiColorspace {
    type Error = QoiErrors;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QoiColorspace::sRGB),
            1 => Ok(QoiColorspace::Linear),
            _ => Err(QoiErrors::UnknownColorspace(value))
        }
    }
}

impl From<ColorCharacteristics> for QoiColorspace {
    fn from(value: ColorCharacteristics) -> Self {
        match value {
            ColorCharacteristics::sRGB => QoiColorspace::sRGB,
            ColorCharacteristics::Linear => QoiColorspace::Linear
        }
    }
}

impl From<QoiColorspace> for ColorCharacteristics {
    fn from(value: QoiColorspace) -> Self {
        match value {
            QoiColorspace::sRGB => ColorCharacteristics::sRGB,
            QoiColorspace::Linear => ColorCharacteristics::Linear
        }
    }
}

/// A decoded QOI header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiHeader {
    pub width:      u32,
    pub height:     u32,
    pub channels:   QoiChannels,
    pub colorspace: QoiColorspace
}

impl QoiHeader {
    pub const fn new(
        width: u32, height: u32, channels: QoiChannels, colorspace: QoiColorspace
    ) -> QoiHeader {
        QoiHeader {
            width,
            height,
            channels,
            colorspace
        }
    }

    /// Number of pixels in the image or `None` if that overflows a `usize`
    pub fn pixel_count(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)
    }

    /// Bytes needed to hold every pixel with `channels` bytes each
    pub fn output_size(&self, channels: usize) -> Option<usize> {
        self.pixel_count()?.checked_mul(channels)
    }

    /// The 14 byte serialized header
    ///
    /// Width and height are written as-is, zero included
    pub fn to_bytes(&self) -> [u8; QOI_HEADER_SIZE] {
        let mut out = [0; QOI_HEADER_SIZE];
        out[0..4].copy_from_slice(&QOI_MAGIC.to_be_bytes());
        out[4..8].copy_from_slice(&self.width.to_be_bytes());
        out[8..12].copy_from_slice(&self.height.to_be_bytes());
        out[12] = self.channels as u8;
        out[13] = self.colorspace as u8;
        out
    }

    pub fn write<T: ByteWriterTrait>(&self, stream: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        stream.write_const_bytes(&self.to_bytes())
    }

    /// Parse a header from the start of `data`
    ///
    /// Unknown channel and colorspace bytes are errors
    pub fn decode(data: &[u8]) -> Result<QoiHeader, QoiErrors> {
        QoiHeader::read(&mut ByteReader::new(ByteCursor::new(data)), true)
    }

    /// Read a header from `stream`
    ///
    /// With `strict` off an unknown colorspace byte is logged and
    /// treated as sRGB, every other irregularity is an error.
    pub fn read<T: ByteReaderTrait>(
        stream: &mut ByteReader<T>, strict: bool
    ) -> Result<QoiHeader, QoiErrors> {
        let magic = stream
            .read_fixed_bytes_or_error::<4>()
            .map_err(|_| QoiErrors::TruncatedHeader)?;

        if u32::from_be_bytes(magic) != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }
        let width = stream
            .get_u32_be_err()
            .map_err(|_| QoiErrors::TruncatedHeader)?;
        let height = stream
            .get_u32_be_err()
            .map_err(|_| QoiErrors::TruncatedHeader)?;
        let channels = stream.get_u8_err().map_err(|_| QoiErrors::TruncatedHeader)?;
        let channels = QoiChannels::try_from(channels)?;

        let colorspace = stream.get_u8_err().map_err(|_| QoiErrors::TruncatedHeader)?;
        let colorspace = match QoiColorspace::try_from(colorspace) {
            Ok(colorspace) => colorspace,
            Err(err) if strict => return Err(err),
            Err(_) => {
                warn!("Unknown/invalid colorspace value {colorspace}, expected 0 or 1");
                QoiColorspace::sRGB
            }
        };
        trace!("Image width: {width}");
        trace!("Image height: {height}");
        trace!("Image channels: {channels:?}, colorspace: {colorspace:?}");

        Ok(QoiHeader::new(width, height, channels, colorspace))
    }
}

/// Append the end marker
pub fn write_end_marker<T: ByteWriterTrait>(stream: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
    stream.write_const_bytes(&QOI_END_MARKER)
}

/// Read and check the 8 bytes following the last chunk
///
/// Missing bytes always fail, mismatching bytes fail only when `strict`
pub fn read_end_marker<T: ByteReaderTrait>(
    stream: &mut ByteReader<T>, strict: bool
) -> Result<(), QoiErrors> {
    let trailer = stream
        .read_fixed_bytes_or_error::<8>()
        .map_err(|_| QoiErrors::MissingEndMarker)?;

    if trailer != QOI_END_MARKER {
        if strict {
            return Err(QoiErrors::InvalidEndMarker(trailer));
        }
        warn!("Last bytes do not match QOI end marker, found {trailer:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use iris_core::bytestream::{ByteCursor, ByteReader, ByteWriter};

    use crate::header::{read_end_marker, write_end_marker, QoiChannels, QoiColorspace, QoiHeader};
    use crate::{QoiErrorKind, QoiErrors};

    #[test]
    fn header_bytes() {
        let header = QoiHeader::new(1, 1, QoiChannels::Rgba, QoiColorspace::sRGB);
        assert_eq!(
            header.to_bytes(),
            [b'q', b'o', b'i', b'f', 0, 0, 0, 1, 0, 0, 0, 1, 4, 0]
        );
        let header = QoiHeader::new(0x0102_0304, 0, QoiChannels::Rgb, QoiColorspace::Linear);
        assert_eq!(header.to_bytes()[4..], [1, 2, 3, 4, 0, 0, 0, 0, 3, 1]);
    }

    #[test]
    fn decodes_what_it_writes() {
        let header = QoiHeader::new(640, 480, QoiChannels::Rgb, QoiColorspace::Linear);
        let mut out = Vec::new();
        header.write(&mut ByteWriter::new(&mut out)).unwrap();

        assert_eq!(out.len(), 14);
        assert_eq!(QoiHeader::decode(&out).unwrap(), header);
    }

    #[test]
    fn zero_dimensions_are_legal() {
        let header = QoiHeader::decode(b"qoif\0\0\0\0\0\0\0\0\x03\x00").unwrap();
        assert_eq!(header.width, 0);
        assert_eq!(header.height, 0);
        assert_eq!(header.pixel_count(), Some(0));
    }

    #[test]
    fn bad_magic() {
        let err = QoiHeader::decode(b"abcd\0\0\0\x01\0\0\0\x01\x03\x00").unwrap_err();
        assert!(matches!(err, QoiErrors::WrongMagicBytes));
        assert_eq!(err.kind(), QoiErrorKind::InvalidHeader);
    }

    #[test]
    fn truncated_header() {
        for len in 0..14 {
            let bytes = &b"qoif\0\0\0\x01\0\0\0\x01\x03\x00"[..len];
            let err = QoiHeader::decode(bytes).unwrap_err();
            assert_eq!(err.kind(), QoiErrorKind::InvalidHeader, "len {len}");
        }
    }

    #[test]
    fn bad_channels_and_colorspace() {
        let err = QoiHeader::decode(b"qoif\0\0\0\0\0\0\0\0\x09\x00").unwrap_err();
        assert!(matches!(err, QoiErrors::UnknownChannels(9)));

        let err = QoiHeader::decode(b"qoif\0\0\0\0\0\0\0\0\x03\x02").unwrap_err();
        assert!(matches!(err, QoiErrors::UnknownColorspace(2)));
    }

    #[test]
    fn bad_channels_reported_before_missing_colorspace() {
        let err = QoiHeader::decode(b"qoif\0\0\0\x01\0\0\0\x01\x05").unwrap_err();
        assert!(matches!(err, QoiErrors::UnknownChannels(5)));
        assert_eq!(err.kind(), QoiErrorKind::InvalidHeader);
    }

    #[test]
    fn lenient_colorspace() {
        let bytes = b"qoif\0\0\0\0\0\0\0\0\x04\x07";
        let mut reader = ByteReader::new(ByteCursor::new(&bytes[..]));
        let header = QoiHeader::read(&mut reader, false).unwrap();
        assert_eq!(header.colorspace, QoiColorspace::sRGB);
        assert_eq!(header.channels, QoiChannels::Rgba);
    }

    #[test]
    fn end_marker() {
        let mut out = Vec::new();
        write_end_marker(&mut ByteWriter::new(&mut out)).unwrap();
        assert_eq!(out, [0, 0, 0, 0, 0, 0, 0, 1]);

        let mut ok = ByteReader::new(ByteCursor::new(&out[..]));
        assert!(read_end_marker(&mut ok, true).is_ok());

        let mut partial = ByteReader::new(ByteCursor::new(&[0_u8, 0, 0, 0, 0][..]));
        assert!(matches!(
            read_end_marker(&mut partial, false),
            Err(QoiErrors::MissingEndMarker)
        ));

        let wrong = [0_u8, 0, 0, 0, 0, 1, 1, 1];
        let mut strict = ByteReader::new(ByteCursor::new(&wrong[..]));
        assert!(matches!(
            read_end_marker(&mut strict, true),
            Err(QoiErrors::InvalidEndMarker(_))
        ));
        let mut lenient = ByteReader::new(ByteCursor::new(&wrong[..]));
        assert!(read_end_marker(&mut lenient, false).is_ok());
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned decoded image and one-call helpers around it
use alloc::vec::Vec;

use iris_core::bit_depth::BitDepth;
use iris_core::bytestream::ByteCursor;
use iris_core::options::EncoderOptions;

use crate::errors::{QoiEncodeErrors, QoiErrors};
use crate::header::{QoiChannels, QoiColorspace};
use crate::{QoiDecoder, QoiEncoder};

/// Interleaved 8 bit pixels with the header fields they belong to
///
/// The pixel buffer always holds exactly
/// `width * height * channels` bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    pixels:     Vec<u8>,
    width:      u32,
    height:     u32,
    channels:   QoiChannels,
    colorspace: QoiColorspace
}

impl Image {
    /// Wrap `pixels` into an image
    ///
    /// # Errors
    /// Fails if the buffer length does not match the dimensions
    pub fn new(
        pixels: Vec<u8>, width: u32, height: u32, channels: QoiChannels, colorspace: QoiColorspace
    ) -> Result<Image, QoiEncodeErrors> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(channels.num_components()))
            .ok_or(QoiEncodeErrors::TooLargeDimensions(width as usize))?;

        if pixels.len() != expected {
            return Err(QoiEncodeErrors::InputLengthMismatch(expected, pixels.len()));
        }
        Ok(Image::from_parts(pixels, width, height, channels, colorspace))
    }

    pub(crate) const fn from_parts(
        pixels: Vec<u8>, width: u32, height: u32, channels: QoiChannels, colorspace: QoiColorspace
    ) -> Image {
        Image {
            pixels,
            width,
            height,
            channels,
            colorspace
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn channels(&self) -> QoiChannels {
        self.channels
    }

    pub const fn colorspace(&self) -> QoiColorspace {
        self.colorspace
    }

    /// Consume the image returning the pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Decode a complete QOI file held in memory
///
/// Uses default [`DecoderOptions`](iris_core::options::DecoderOptions),
/// pixels come out with the channel count the header declares.
///
/// # Example
/// ```
/// let bytes = [
///     b'q', b'o', b'i', b'f', 0, 0, 0, 1, 0, 0, 0, 1, 3, 0, // header
///     0xFE, 128, 0, 0, // rgb chunk
///     0, 0, 0, 0, 0, 0, 0, 1 // end marker
/// ];
/// let image = iris_qoi::decode(&bytes).unwrap();
/// assert_eq!(image.pixels(), &[128, 0, 0]);
/// ```
pub fn decode(data: &[u8]) -> Result<Image, QoiErrors> {
    QoiDecoder::new(ByteCursor::new(data)).decode_image()
}

/// Encode an image into a new QOI file
pub fn encode(image: &Image) -> Result<Vec<u8>, QoiEncodeErrors> {
    let options = EncoderOptions::new(
        image.width as usize,
        image.height as usize,
        image.channels.colorspace(),
        BitDepth::Eight
    );
    let mut encoder = QoiEncoder::new(&image.pixels, options);
    encoder.set_color_characteristics(image.colorspace.into());

    encoder.encode_to_vec()
}

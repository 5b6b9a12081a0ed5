/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use iris_core::bit_depth::BitDepth;
use iris_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};
use iris_core::colorspace::{ColorCharacteristics, ColorSpace};
use iris_core::log::trace;
use iris_core::options::EncoderOptions;

use crate::chunk::Chunk;
use crate::constants::{QOI_HEADER_SIZE, QOI_MAX_RUN, QOI_PADDING};
use crate::header::{write_end_marker, QoiChannels, QoiHeader};
use crate::pixel::{Pixel, PixelCache};
use crate::QoiEncodeErrors;

const SUPPORTED_COLORSPACES: [ColorSpace; 2] = [ColorSpace::RGB, ColorSpace::RGBA];

/// Running state of an encode
///
/// Pixels are pushed in stream order, repeats are held back until the
/// run ends or reaches 62 pixels.
#[derive(Clone, Debug)]
pub struct ChunkEncoder {
    cache: PixelCache,
    prev:  Pixel,
    run:   u8
}

impl Default for ChunkEncoder {
    fn default() -> Self {
        ChunkEncoder::new()
    }
}

impl ChunkEncoder {
    pub const fn new() -> ChunkEncoder {
        ChunkEncoder {
            cache: PixelCache::new(),
            prev:  Pixel::START,
            run:   0
        }
    }

    /// Encode the next pixel, writing zero or more chunks
    #[inline(always)]
    pub fn push<T: ByteWriterTrait>(
        &mut self, px: Pixel, stream: &mut ByteWriter<T>
    ) -> Result<(), ByteIoError> {
        if px == self.prev {
            self.run += 1;

            if self.run == QOI_MAX_RUN {
                self.flush_run(stream)?;
            }
            return Ok(());
        }
        self.flush_run(stream)?;

        let chunk = Chunk::for_pixel(self.prev, px, &self.cache);
        chunk.write(stream)?;

        if chunk.updates_cache() {
            self.cache.insert(px);
        }
        self.prev = px;

        Ok(())
    }

    /// Write out a pending run, if any
    ///
    /// Must be called once after the last pixel
    pub fn finish<T: ByteWriterTrait>(&mut self, stream: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        self.flush_run(stream)
    }

    fn flush_run<T: ByteWriterTrait>(&mut self, stream: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        if self.run > 0 {
            Chunk::Run(self.run).write(stream)?;
            // the decoder caches the repeated pixel once per run chunk
            self.cache.insert(self.prev);
            self.run = 0;
        }
        Ok(())
    }

    pub const fn cache(&self) -> &PixelCache {
        &self.cache
    }
}

/// Quite Ok Image Encoder
///
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use iris_core::bit_depth::BitDepth;
/// use iris_core::colorspace::ColorSpace;
/// use iris_core::options::EncoderOptions;
/// use iris_qoi::QoiEncoder;
/// use iris_qoi::QoiEncodeErrors;
///
/// const W: usize = 100;
/// const H: usize = 100;
///
/// fn main() -> Result<(), QoiEncodeErrors> {
///     let pixels = std::array::from_fn::<u8, { W * H * 3 }, _>(|i| (i % 256) as u8);
///     let mut encoder = QoiEncoder::new(&pixels, EncoderOptions::new(W, H, ColorSpace::RGB, BitDepth::Eight));
///     let mut sink = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     Ok(())
/// }
/// ```
pub struct QoiEncoder<'a> {
    // raw pixels, in RGB or RBGA
    pixel_data:            &'a [u8],
    options:               EncoderOptions,
    color_characteristics: ColorCharacteristics
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> QoiEncoder<'a> {
        QoiEncoder {
            pixel_data: data,
            options,
            color_characteristics: ColorCharacteristics::sRGB
        }
    }

    /// Set what the header records about the channel values,
    /// sRGB (the default) or linear
    pub fn set_color_characteristics(&mut self, characteristics: ColorCharacteristics) {
        self.color_characteristics = characteristics;
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// Saturates instead of overflowing for absurd dimensions
    pub fn max_size(&self) -> usize {
        self.options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(self.options.colorspace().num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING)
    }

    /// Check the options and input against each other
    /// and build the header to write
    fn header(&self) -> Result<QoiHeader, QoiEncodeErrors> {
        let options = &self.options;

        let channels = QoiChannels::try_from(options.colorspace()).map_err(|found| {
            QoiEncodeErrors::UnsupportedColorspace(found, &SUPPORTED_COLORSPACES)
        })?;

        if options.depth() != BitDepth::Eight {
            return Err(QoiEncodeErrors::UnsupportedBitDepth(options.depth()));
        }
        let width = u32::try_from(options.width())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(options.width()))?;
        let height = u32::try_from(options.height())
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(options.height()))?;

        let expected_len = options
            .width()
            .checked_mul(options.height())
            .and_then(|pixels| pixels.checked_mul(channels.num_components()))
            .ok_or(QoiEncodeErrors::TooLargeDimensions(options.width()))?;

        if self.pixel_data.len() != expected_len {
            return Err(QoiEncodeErrors::InputLengthMismatch(
                expected_len,
                self.pixel_data.len()
            ));
        }

        Ok(QoiHeader::new(
            width,
            height,
            channels,
            self.color_characteristics.into()
        ))
    }

    /// Encode into `sink`
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ByteWriterTrait>(&mut self, sink: T) -> Result<usize, QoiEncodeErrors> {
        let header = self.header()?;
        let mut stream = ByteWriter::new(sink);

        stream.reserve(self.max_size())?;
        header.write(&mut stream)?;

        let channel_count = header.channels.num_components();
        let mut state = ChunkEncoder::new();

        for pix_chunk in self.pixel_data.chunks_exact(channel_count) {
            state.push(Pixel::from_channels(pix_chunk), &mut stream)?;
        }
        state.finish(&mut stream)?;

        write_end_marker(&mut stream)?;
        stream.flush()?;

        let len = stream.bytes_written();
        trace!("Encoded {}x{} image into {len} bytes", header.width, header.height);

        Ok(len)
    }

    /// Encode into a freshly allocated vector
    pub fn encode_to_vec(&mut self) -> Result<Vec<u8>, QoiEncodeErrors> {
        let mut output = Vec::new();
        self.encode(&mut output)?;
        Ok(output)
    }
}

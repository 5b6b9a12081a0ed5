/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use iris_core::bit_depth::BitDepth;
use iris_core::bytestream::{ByteReader, ByteReaderTrait};
use iris_core::colorspace::{ColorCharacteristics, ColorSpace};
use iris_core::log::trace;
use iris_core::options::DecoderOptions;

use crate::chunk::Chunk;
use crate::errors::QoiErrors;
use crate::header::{read_end_marker, QoiChannels, QoiHeader};
use crate::image::Image;
use crate::pixel::{Pixel, PixelCache};

/// Running state of a decode
///
/// Holds the pixel cache and the previously reconstructed pixel,
/// one is created per image and fed chunks in stream order.
#[derive(Clone, Debug)]
pub struct ChunkDecoder {
    cache: PixelCache,
    prev:  Pixel
}

impl Default for ChunkDecoder {
    fn default() -> Self {
        ChunkDecoder::new()
    }
}

impl ChunkDecoder {
    pub const fn new() -> ChunkDecoder {
        ChunkDecoder {
            cache: PixelCache::new(),
            prev:  Pixel::START
        }
    }

    /// Decode the chunk introduced by `tag`
    ///
    /// # Returns
    /// The reconstructed pixel and how many consecutive output
    /// pixels it fills (more than one only for runs)
    #[inline(always)]
    pub fn decode_chunk<T: ByteReaderTrait>(
        &mut self, tag: u8, stream: &mut ByteReader<T>
    ) -> Result<(Pixel, usize), QoiErrors> {
        let chunk = Chunk::read(tag, stream)?;
        let px = chunk.apply(self.prev, &self.cache);

        if chunk.updates_cache() {
            self.cache.insert(px);
        }
        self.prev = px;

        Ok((px, chunk.pixel_count()))
    }

    pub const fn cache(&self) -> &PixelCache {
        &self.cache
    }

    pub const fn previous(&self) -> Pixel {
        self.prev
    }
}

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<T>
where
    T: ByteReaderTrait
{
    header:  Option<QoiHeader>,
    stream:  ByteReader<T>,
    options: DecoderOptions
}

impl<T> QoiDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use iris_core::bytestream::ByteCursor;
    /// let mut decoder = iris_qoi::QoiDecoder::new(ByteCursor::new(&[0_u8; 0]));
    /// // additional code
    /// ```
    pub fn new(data: T) -> QoiDecoder<T> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use iris_core::bytestream::ByteCursor;
    /// use iris_core::options::DecoderOptions;
    /// use iris_qoi::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(ByteCursor::new([0_u8; 0]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> QoiDecoder<T> {
        QoiDecoder {
            header: None,
            stream: ByteReader::new(data),
            options
        }
    }
    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Calling it again after a successful decode is a no-op
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let header = QoiHeader::read(&mut self.stream, self.options.strict_mode())?;

        let width = header.width as usize;
        let height = header.height as usize;

        if width > self.options.max_width() {
            return Err(QoiErrors::TooLargeDimensions(
                "Width",
                width,
                self.options.max_width()
            ));
        }
        if height > self.options.max_height() {
            return Err(QoiErrors::TooLargeDimensions(
                "Height",
                height,
                self.options.max_height()
            ));
        }
        self.header = Some(header);

        Ok(())
    }

    /// The parsed header, `None` before [`decode_headers`](Self::decode_headers)
    pub const fn header(&self) -> Option<&QoiHeader> {
        self.header.as_ref()
    }

    /// Layout decoded pixels will be returned in
    ///
    /// That is the one requested via [`DecoderOptions::set_out_colorspace`]
    /// or else the one stored in the header
    fn output_colorspace(&self, header: &QoiHeader) -> Result<ColorSpace, QoiErrors> {
        match self.options.out_colorspace() {
            None => Ok(header.channels.colorspace()),
            Some(ColorSpace::RGB) => Ok(ColorSpace::RGB),
            Some(ColorSpace::RGBA) => Ok(ColorSpace::RGBA),
            Some(other) => Err(QoiErrors::UnsupportedOutputColorspace(other))
        }
    }

    /// Return the number of bytes required to hold a decoded image frame
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the headers were not decoded, the requested
    ///     output colorspace is unsupported or the size overflows a `usize`
    pub fn output_buffer_size(&self) -> Option<usize> {
        let header = self.header.as_ref()?;
        let colorspace = self.output_colorspace(header).ok()?;

        header.output_size(colorspace.num_components())
    }

    /// Decode the bytes of a QOI image data, returning the
    /// uncompressed bytes or the error encountered during decoding
    ///
    /// Additional details about the encoded image can be found after calling this/[`decode_headers`]
    ///
    /// i.e the width and height. can be accessed by [`dimensions`] method.
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    pub fn decode(&mut self) -> Result<Vec<u8>, QoiErrors> {
        self.decode_headers()?;

        let (size, _) = self.output_layout()?;
        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode into an [`Image`] carrying dimensions and layout with the pixels
    pub fn decode_image(&mut self) -> Result<Image, QoiErrors> {
        let pixels = self.decode()?;
        // decode succeeded so the header is there
        let header = self.header.ok_or(QoiErrors::TruncatedHeader)?;
        let channels = if self.output_colorspace(&header)?.has_alpha() {
            QoiChannels::Rgba
        } else {
            QoiChannels::Rgb
        };

        Ok(Image::from_parts(
            pixels,
            header.width,
            header.height,
            channels,
            header.colorspace
        ))
    }

    /// Decode a compressed Qoi image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the image
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    /// pixels
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        self.decode_headers()?;

        let (size, components) = self.output_layout()?;

        if pixels.len() < size {
            return Err(QoiErrors::TooSmallOutput(size, pixels.len()));
        }
        let pixels = &mut pixels[..size];

        match components {
            3 => self.decode_inner_generic::<3>(pixels)?,
            _ => self.decode_inner_generic::<4>(pixels)?
        }
        Ok(())
    }

    /// Output size in bytes and bytes per output pixel
    fn output_layout(&self) -> Result<(usize, usize), QoiErrors> {
        let header = self.header.ok_or(QoiErrors::TruncatedHeader)?;
        let components = self.output_colorspace(&header)?.num_components();

        let size = header
            .output_size(components)
            .ok_or(QoiErrors::TooLargeDimensions(
                "Image size",
                header.width as usize,
                usize::MAX
            ))?;

        Ok((size, components))
    }

    fn decode_inner_generic<const SIZE: usize>(
        &mut self, pixels: &mut [u8]
    ) -> Result<(), QoiErrors> {
        let expected = pixels.len() / SIZE;
        let mut state = ChunkDecoder::new();
        let mut decoded = 0;

        let mut remaining = pixels.chunks_exact_mut(SIZE);

        while decoded < expected {
            let tag = self
                .stream
                .get_u8_err()
                .map_err(|_| QoiErrors::TruncatedStream { decoded, expected })?;

            let (px, count) = state.decode_chunk(tag, &mut self.stream)?;

            if count > expected - decoded {
                return Err(QoiErrors::RunOverflow {
                    run:       count,
                    remaining: expected - decoded
                });
            }
            for pix_chunk in remaining.by_ref().take(count) {
                px.write_channels(pix_chunk);
            }
            decoded += count;
        }
        read_end_marker(&mut self.stream, self.options.strict_mode())?;

        trace!("Finished decoding image");

        Ok(())
    }

    /// Returns the colorspace decoded pixels come out in, or none if
    /// the headers haven't been decoded
    ///
    /// Colorspace returned can either be [RGB] or [RGBA]
    ///
    /// [RGB]: iris_core::colorspace::ColorSpace::RGB
    /// [RGBA]: iris_core::colorspace::ColorSpace::RGBA
    pub fn colorspace(&self) -> Option<ColorSpace> {
        let header = self.header.as_ref()?;
        self.output_colorspace(header).ok()
    }

    /// Returns how the stored channels should be interpreted, sRGB or linear
    pub fn color_characteristics(&self) -> Option<ColorCharacteristics> {
        self.header
            .as_ref()
            .map(|header| header.colorspace.into())
    }

    /// Return QOI default bit depth
    ///
    /// This is always 8
    ///
    /// # Example
    ///
    /// ```
    /// use iris_core::bit_depth::BitDepth;
    /// use iris_core::bytestream::ByteCursor;
    /// use iris_qoi::QoiDecoder;
    /// let decoder = QoiDecoder::new(ByteCursor::new(&[0_u8; 0]));
    /// assert_eq!(decoder.bit_depth(), BitDepth::Eight)
    /// ```
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use iris_core::bytestream::ByteCursor;
    /// use iris_qoi::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(ByteCursor::new(&[0_u8; 0]));
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w, h) = decoder.dimensions().unwrap();
    /// ```
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header
            .as_ref()
            .map(|header| (header.width as usize, header.height as usize))
    }
}

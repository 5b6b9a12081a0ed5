/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

use crate::colorspace::ColorSpace;

/// Decoder options
///
/// Not all options are respected by all decoders,
/// each option documents which decoders respect it
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:      usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height:     usize,
    /// Treat recoverable irregularities as errors
    ///
    /// When set to false, such irregularities are logged
    /// and decoding continues.
    ///
    /// - Default value: true
    /// - Respected by: `qoi`
    strict_mode:    bool,
    /// Output colorspace
    ///
    /// When `None` the decoder returns pixels in the layout
    /// stored in the image.
    ///
    /// - Default value: `None`
    /// - Respected by: `qoi`
    out_colorspace: Option<ColorSpace>
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    true,
            out_colorspace: None
        }
    }
}

impl DecoderOptions {
    /// Create decoder options which log recoverable irregularities
    /// instead of failing
    pub fn new_lenient() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(false)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject recoverable errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// The colorspace the caller wants decoded pixels in, if any
    pub const fn out_colorspace(&self) -> Option<ColorSpace> {
        self.out_colorspace
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Request decoded pixels in `colorspace` instead of the stored layout
    #[must_use]
    pub fn set_out_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.out_colorspace = Some(colorspace);
        self
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;

/// Options shared by the encoders in
/// the `iris` family of image crates
///
/// They describe the raw pixels handed to an encoder.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Image colorspaces
    /// * `depth`: Image depth
    pub fn new(width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            depth
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }
}

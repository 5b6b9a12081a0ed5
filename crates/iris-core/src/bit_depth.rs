/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The image bit depth.
///
/// Codecs in this family store 8 bit samples in a [`u8`],
/// deeper samples are carried around so encoders can
/// reject them with a useful error instead of
/// silently reinterpreting the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    #[default]
    Eight,
    /// Sixteen bit depth
    ///
    /// Images with such bit depths use [`u16`] to store values and use the whole range
    /// i.e 0-65535
    Sixteen
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Pixel channel layouts a caller may hand to a codec.
///
/// Not every codec can represent every layout, e.g QOI only
/// stores [RGB](ColorSpace::RGB) and [RGBA](ColorSpace::RGBA), the
/// others exist so encoders can report what they were given.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Grayscale colorspace
    Luma
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Luma => 1
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }
}

/// Color characteristics
///
/// Gives more information about how values in a
/// colorspace should be interpreted
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ColorCharacteristics {
    /// sRGB transfer function on the color channels, alpha is linear
    #[default]
    sRGB,
    /// All channels are linear
    Linear
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Serialization of image descriptors
//!
//! Descriptors serialize to their debug name, e.g `ColorSpace::RGBA`
//! becomes the string `"RGBA"`.
#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::{Serialize, Serializer};

use crate::bit_depth::BitDepth;
use crate::colorspace::{ColorCharacteristics, ColorSpace};

macro_rules! serialize_by_name {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer
                {
                    serializer.serialize_str(&format!("{self:?}"))
                }
            }
        )+
    };
}

serialize_by_name!(ColorSpace, BitDepth, ColorCharacteristics);

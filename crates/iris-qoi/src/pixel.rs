/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::QOI_CACHE_SIZE;

/// A single RGBA pixel
///
/// RGB images carry alpha too, it's whatever the last full
/// RGBA chunk set it to (255 unless told otherwise), it just
/// isn't emitted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel([u8; 4]);

impl Pixel {
    /// The pixel every encode and decode starts from
    pub const START: Pixel = Pixel([0, 0, 0, 255]);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel([r, g, b, a])
    }

    /// Build a pixel from 3 or 4 interleaved channels,
    /// a missing alpha is taken to be opaque
    #[inline(always)]
    pub fn from_channels(channels: &[u8]) -> Pixel {
        let mut px = [0, 0, 0, 255];
        px[..channels.len()].copy_from_slice(channels);
        Pixel(px)
    }

    pub const fn r(self) -> u8 {
        self.0[0]
    }

    pub const fn g(self) -> u8 {
        self.0[1]
    }

    pub const fn b(self) -> u8 {
        self.0[2]
    }

    pub const fn a(self) -> u8 {
        self.0[3]
    }

    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }

    /// Write the first `out.len()` channels (3 or 4) into `out`
    #[inline(always)]
    pub fn write_channels(self, out: &mut [u8]) {
        out.copy_from_slice(&self.0[..out.len()]);
    }

    /// Same pixel with red, green and blue replaced
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Pixel {
        Pixel([r, g, b, self.0[3]])
    }

    /// Add per channel deltas modulo 256, alpha is untouched
    #[inline(always)]
    pub const fn wrapping_add_rgb(self, dr: u8, dg: u8, db: u8) -> Pixel {
        Pixel([
            self.0[0].wrapping_add(dr),
            self.0[1].wrapping_add(dg),
            self.0[2].wrapping_add(db),
            self.0[3]
        ])
    }

    /// Per channel `self - prev` for red, green and blue, modulo 256
    #[inline(always)]
    pub const fn wrapping_sub_rgb(self, prev: Pixel) -> [u8; 3] {
        [
            self.0[0].wrapping_sub(prev.0[0]),
            self.0[1].wrapping_sub(prev.0[1]),
            self.0[2].wrapping_sub(prev.0[2])
        ]
    }

    /// Slot this pixel occupies in a [`PixelCache`]
    ///
    /// `(r * 3 + g * 5 + b * 7 + a * 11) % 64`
    #[inline(always)]
    pub const fn hash_index(self) -> u8 {
        let [r, g, b, a] = self.0;
        let sum = (r as u32) * 3 + (g as u32) * 5 + (b as u32) * 7 + (a as u32) * 11;
        (sum % QOI_CACHE_SIZE as u32) as u8
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(value: [u8; 4]) -> Self {
        Pixel(value)
    }
}

/// The 64 slot table of recently seen pixels
///
/// One lives for the duration of a single encode or decode.
/// Both sides write to it only when a pixel is observed through
/// anything other than an index chunk, which keeps encoder and
/// decoder tables identical after every chunk.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelCache {
    slots: [Pixel; QOI_CACHE_SIZE]
}

impl Default for PixelCache {
    fn default() -> Self {
        PixelCache::new()
    }
}

impl PixelCache {
    /// A cache with every slot set to `(0, 0, 0, 0)`
    pub const fn new() -> PixelCache {
        PixelCache {
            slots: [Pixel([0; 4]); QOI_CACHE_SIZE]
        }
    }

    #[inline(always)]
    pub fn get(&self, index: u8) -> Pixel {
        self.slots[usize::from(index) % QOI_CACHE_SIZE]
    }

    /// Store `px` in its slot
    #[inline(always)]
    pub fn insert(&mut self, px: Pixel) {
        self.slots[usize::from(px.hash_index())] = px;
    }

    /// Slot index holding `px`, if its slot holds exactly `px`
    #[inline(always)]
    pub fn position(&self, px: Pixel) -> Option<u8> {
        let index = px.hash_index();
        (self.slots[usize::from(index)] == px).then_some(index)
    }

    pub fn slots(&self) -> &[Pixel; QOI_CACHE_SIZE] {
        &self.slots
    }
}

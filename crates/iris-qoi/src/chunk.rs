/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The chunk vocabulary of the format
//!
//! Every chunk starts with a tag byte. The two exact values
//! `0xFE` and `0xFF` introduce full color chunks, every other tag is
//! classified by its top two bits.
//!
//! | tag         | chunk | payload |
//! |-------------|-------|---------|
//! | `11111110`  | RGB   | r, g, b |
//! | `11111111`  | RGBA  | r, g, b, a |
//! | `00xxxxxx`  | index | none |
//! | `01rrggbb`  | diff  | none |
//! | `10gggggg`  | luma  | `rrrrbbbb` |
//! | `11xxxxxx`  | run   | none |
//!
//! Deltas are carried as `u8` holding the signed difference modulo 256,
//! so `-1` is `255`. All arithmetic on them wraps.

use iris_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait, ByteWriter, ByteWriterTrait};

use crate::constants::{
    QOI_MASK_2, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_OP_RUN
};
use crate::errors::QoiErrors;
use crate::pixel::{Pixel, PixelCache};

/// A single chunk of the compressed stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Chunk {
    /// New red, green and blue, alpha carried over
    Rgb { r: u8, g: u8, b: u8 },
    /// A whole new pixel
    Rgba(Pixel),
    /// Pixel stored in cache slot `0..64`
    Index(u8),
    /// Channel deltas in `-2..=1`
    Diff { dr: u8, dg: u8, db: u8 },
    /// Green delta in `-32..=31`, red and blue relative to it in `-8..=7`
    Luma { dg: u8, dr_dg: u8, db_dg: u8 },
    /// Repeat the previous pixel `1..=62` times
    Run(u8)
}

/// `delta` lies in `-bias..bias` when read as a signed byte
#[inline(always)]
const fn fits(delta: u8, bias: u8) -> bool {
    delta.wrapping_add(bias) < bias * 2
}

impl Chunk {
    /// Parse the chunk introduced by `tag`, pulling its payload from `stream`
    ///
    /// Exact full color tags are checked before the two bit classes since
    /// both share the run prefix `11`.
    pub fn read<T: ByteReaderTrait>(tag: u8, stream: &mut ByteReader<T>) -> Result<Chunk, QoiErrors> {
        let chunk = if tag == QOI_OP_RGB {
            let [r, g, b] = stream
                .read_fixed_bytes_or_error::<3>()
                .map_err(|_| QoiErrors::TruncatedChunk(tag))?;
            Chunk::Rgb { r, g, b }
        } else if tag == QOI_OP_RGBA {
            let px = stream
                .read_fixed_bytes_or_error::<4>()
                .map_err(|_| QoiErrors::TruncatedChunk(tag))?;
            Chunk::Rgba(Pixel::from(px))
        } else {
            match tag & QOI_MASK_2 {
                QOI_OP_INDEX => Chunk::Index(tag & 0x3f),
                QOI_OP_DIFF => Chunk::Diff {
                    dr: ((tag >> 4) & 0x03).wrapping_sub(2),
                    dg: ((tag >> 2) & 0x03).wrapping_sub(2),
                    db: (tag & 0x03).wrapping_sub(2)
                },
                QOI_OP_LUMA => {
                    let b2 = stream
                        .get_u8_err()
                        .map_err(|_| QoiErrors::TruncatedChunk(tag))?;
                    Chunk::Luma {
                        dg:    (tag & 0x3f).wrapping_sub(32),
                        dr_dg: (b2 >> 4).wrapping_sub(8),
                        db_dg: (b2 & 0x0f).wrapping_sub(8)
                    }
                }
                _ => Chunk::Run((tag & 0x3f) + 1)
            }
        };
        Ok(chunk)
    }

    /// Serialize this chunk, tag first
    pub fn write<T: ByteWriterTrait>(self, stream: &mut ByteWriter<T>) -> Result<(), ByteIoError> {
        match self {
            Chunk::Rgb { r, g, b } => stream.write_const_bytes(&[QOI_OP_RGB, r, g, b]),
            Chunk::Rgba(px) => {
                let [r, g, b, a] = px.to_array();
                stream.write_const_bytes(&[QOI_OP_RGBA, r, g, b, a])
            }
            Chunk::Index(index) => stream.write_u8_err(QOI_OP_INDEX | (index & 0x3f)),
            Chunk::Diff { dr, dg, db } => stream.write_u8_err(
                QOI_OP_DIFF
                    | (dr.wrapping_add(2) << 4)
                    | (dg.wrapping_add(2) << 2)
                    | db.wrapping_add(2)
            ),
            Chunk::Luma { dg, dr_dg, db_dg } => stream.write_const_bytes(&[
                QOI_OP_LUMA | dg.wrapping_add(32),
                (dr_dg.wrapping_add(8) << 4) | db_dg.wrapping_add(8)
            ]),
            Chunk::Run(length) => {
                debug_assert!((1..=QOI_MAX_RUN).contains(&length));
                stream.write_u8_err(QOI_OP_RUN | (length - 1))
            }
        }
    }

    /// Reconstruct the pixel this chunk describes given the
    /// previous pixel, for a run that's the previous pixel itself
    #[inline(always)]
    pub fn apply(self, prev: Pixel, cache: &PixelCache) -> Pixel {
        match self {
            Chunk::Rgb { r, g, b } => prev.with_rgb(r, g, b),
            Chunk::Rgba(px) => px,
            Chunk::Index(index) => cache.get(index),
            Chunk::Diff { dr, dg, db } => prev.wrapping_add_rgb(dr, dg, db),
            Chunk::Luma { dg, dr_dg, db_dg } => {
                prev.wrapping_add_rgb(dr_dg.wrapping_add(dg), dg, db_dg.wrapping_add(dg))
            }
            Chunk::Run(_) => prev
        }
    }

    /// Number of pixels this chunk expands to
    #[inline(always)]
    pub const fn pixel_count(self) -> usize {
        match self {
            Chunk::Run(length) => length as usize,
            _ => 1
        }
    }

    /// Whether the reconstructed pixel goes into the cache
    ///
    /// Index chunks read the cache, everything else writes it.
    #[inline(always)]
    pub const fn updates_cache(self) -> bool {
        !matches!(self, Chunk::Index(_))
    }

    /// Pick the cheapest single pixel chunk that takes `prev` to `next`
    ///
    /// In order: cache hit, small diff, luma diff, then full color.
    /// Runs are not considered, the caller coalesces repeats before
    /// reaching here.
    pub fn for_pixel(prev: Pixel, next: Pixel, cache: &PixelCache) -> Chunk {
        if let Some(index) = cache.position(next) {
            return Chunk::Index(index);
        }
        if next.a() != prev.a() {
            return Chunk::Rgba(next);
        }
        let [dr, dg, db] = next.wrapping_sub_rgb(prev);

        if fits(dr, 2) && fits(dg, 2) && fits(db, 2) {
            return Chunk::Diff { dr, dg, db };
        }
        let dr_dg = dr.wrapping_sub(dg);
        let db_dg = db.wrapping_sub(dg);

        if fits(dg, 32) && fits(dr_dg, 8) && fits(db_dg, 8) {
            return Chunk::Luma { dg, dr_dg, db_dg };
        }
        Chunk::Rgb {
            r: next.r(),
            g: next.g(),
            b: next.b()
        }
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `qoif` read as a big endian integer
pub const QOI_MAGIC: u32 = u32::from_be_bytes(*b"qoif");
pub const QOI_HEADER_SIZE: usize = 14;

/// Fixed trailer closing the chunk stream
pub const QOI_END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
pub const QOI_PADDING: usize = QOI_END_MARKER.len();

pub const QOI_OP_INDEX: u8 = 0b0000_0000;
pub const QOI_OP_DIFF: u8 = 0b0100_0000;
pub const QOI_OP_LUMA: u8 = 0b1000_0000;
pub const QOI_OP_RUN: u8 = 0b1100_0000;
pub const QOI_OP_RGB: u8 = 0b1111_1110;
pub const QOI_OP_RGBA: u8 = 0b1111_1111;

pub const QOI_MASK_2: u8 = 0b1100_0000;

/// Longest run a single run chunk can carry, 62 and 63 collide
/// with the RGB and RGBA tags
pub const QOI_MAX_RUN: u8 = 62;
pub const QOI_CACHE_SIZE: usize = 64;

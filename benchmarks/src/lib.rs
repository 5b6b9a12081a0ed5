/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Width and height of the benchmark image
pub const SIZE: usize = 1024;

/// Build an RGBA image mixing smooth regions, flat areas and noise
///
/// Roughly the chunk mix of a photograph with some UI on top
pub fn sample_image() -> Vec<u8> {
    let mut rng = WyRand::new_seed(0x2545_F491);
    let mut out = Vec::with_capacity(SIZE * SIZE * 4);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let state = rng.generate::<u32>();

            let px = if y < SIZE / 4 {
                // flat banner
                [40, 44, 52, 255]
            } else if x < SIZE / 2 {
                let noise = (state & 3) as u8;
                [(x / 4) as u8 + noise, (y / 4) as u8, ((x + y) / 8) as u8, 255]
            } else {
                let [r, g, b, a] = state.to_le_bytes();
                [r, g, b, a | 0x80]
            };
            out.extend_from_slice(&px);
        }
    }
    out
}

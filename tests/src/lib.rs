/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports)]

use std::fs::read;
use std::path::Path;

use iris_core::colorspace::ColorSpace;
use nanorand::{Rng, WyRand};
use serde::Deserialize;

mod errors;
mod qoi;
mod serde_names;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonColorspace {
    RGB,
    RGBA
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::RGB => ColorSpace::RGB,
            Self::RGBA => ColorSpace::RGBA
        }
    }
}

/// How the pixels of a test image are generated
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Flat,
    Gradient,
    Stripes,
    Noise
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub width:      u32,
    pub height:     u32,
    pub colorspace: JsonColorspace,
    pub pattern:    Pattern,
    pub comment:    Option<String>
}

impl TestEntry {
    /// Interleaved pixels for this entry, the same on every run
    pub fn pixels(&self) -> Vec<u8> {
        let components = self.colorspace.to_colorspace().num_components();
        let count = self.width as usize * self.height as usize;
        let mut rng = WyRand::new_seed(self.name.len() as u64 + 1);

        let mut out = Vec::with_capacity(count * components);

        for i in 0..count {
            let (x, y) = (i % self.width as usize, i / self.width as usize);
            let px: [u8; 4] = match self.pattern {
                Pattern::Flat => [200, 100, 50, 255],
                Pattern::Gradient => [x as u8, y as u8, (x + y) as u8, 255 - (x / 4) as u8],
                Pattern::Stripes => {
                    const PALETTE: [[u8; 4]; 5] = [
                        [255, 0, 0, 255],
                        [0, 255, 0, 255],
                        [0, 0, 255, 128],
                        [10, 10, 10, 255],
                        [250, 250, 250, 0]
                    ];
                    PALETTE[(x / 3 + y) % PALETTE.len()]
                }
                Pattern::Noise => rng.generate::<u32>().to_le_bytes()
            };
            out.extend_from_slice(&px[..components]);
        }
        out
    }
}

pub fn read_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/qoi.json");
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

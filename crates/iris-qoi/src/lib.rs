/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite Ok Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//!
//! # Features
//! - Decoding and encoding
//! - Streaming chunk level encoder and decoder state
//! -`no_std`
//! - Fuzz tested
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
//!
//! # Example
//! ```
//! use iris_qoi::header::{QoiChannels, QoiColorspace};
//! use iris_qoi::Image;
//!
//! let pixels = vec![255, 0, 0, 255, 255, 0, 0, 255];
//! let image = Image::new(pixels, 2, 1, QoiChannels::Rgba, QoiColorspace::sRGB).unwrap();
//!
//! let bytes = iris_qoi::encode(&image).unwrap();
//! assert_eq!(iris_qoi::decode(&bytes).unwrap(), image);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use image::*;
pub use iris_core;

pub mod chunk;
mod constants;
mod decoder;
mod encoder;
mod errors;
pub mod header;
mod image;
pub mod pixel;

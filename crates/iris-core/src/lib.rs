/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the iris codecs
//!
//! This crate provides the pieces every decoder and encoder
//! under the `iris` umbrella needs
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace and bit depth information shared by images
//! - Image decoder and encoder options
//! - A logging facade that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables `std::io` readers/writers and `std::error::Error` impls
//!
//!  - `log`: Routes the logging macros to the [`log`](https://docs.rs/log) crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;

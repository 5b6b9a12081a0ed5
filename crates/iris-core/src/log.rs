/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging facade
//!
//! With the `log` feature these are the `log` crate macros,
//! without it they swallow their arguments so codecs can log
//! unconditionally.

#[cfg(feature = "log")]
pub use log::{trace, warn};

#[cfg(not(feature = "log"))]
pub use crate::{__trace as trace, __warn as warn};

// exported macros land in the crate root, the hidden names
// plus the re-export above give them a module path.

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_rgb_color
//!
//! An RGB color value for the terminal. You can:
//!
//! 1. Create it from component bytes ([`RgbColor::new()`]) or from a hex color code
//!    ([`RgbColor::try_from_hex()`]), eg: `#ff0009`, `fba`, `ff00090x`.
//! 2. Fade it linearly toward one or more target colors as a value moves across a
//!    numeric range ([`RgbColor::fade()`]).
//! 3. Print text to the terminal using it as the foreground color
//!    ([`RgbColor::println()`], [`RgbColor::sprint()`], [`RgbColor::printf()`], etc).
//!
//! The escape sequences that are emitted depend on the color support of the terminal,
//! which is detected at runtime (and can be overridden using
//! [`global_color_support::set_override()`]). Output goes to stdout by default, and can
//! be redirected using [`global_output_device::set_override()`].
//!
//! # Example usage
//!
//! ```rust
//! use r3bl_rgb_color::{RgbColor, rgb_color};
//!
//! let start = RgbColor::new(255, 0, 0);
//! let end = RgbColor::try_from_hex("#0000ff").unwrap();
//!
//! // Halfway between red and blue.
//! let middle = start.fade(0.0, 100.0, 50.0, &[end]);
//! assert_eq!(middle.values(), (127, 0, 127));
//!
//! // Red -> green -> blue.
//! let stops = [rgb_color!(0, 255, 0), end];
//! for line in 0..10 {
//!     let color = start.fade(0.0, 9.0, line as f32, &stops);
//!     color.println(format!("line {line} is {color}"));
//! }
//!
//! // Format arguments work too.
//! let it = end.sprintf(format_args!("{} + {} = {}", 1, 2, 1 + 2));
//! assert!(it.contains("1 + 2 = 3"));
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi;
pub mod error;
pub mod log;
pub mod output;
pub mod rgb;
pub mod test_fixtures;

mod decl_macros;

// Re-export.
pub use ansi::*;
pub use error::*;
pub use log::*;
pub use output::*;
pub use rgb::*;
pub use test_fixtures::*;

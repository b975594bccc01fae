// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced when turning text into an [`RgbColor`].
//!
//! [`RgbColor`]: crate::RgbColor

/// Errors from [`RgbColor::try_from_hex()`].
///
/// | Variant             | Cause                                                    |
/// | :------------------ | :------------------------------------------------------- |
/// | [`InvalidLength`]   | After removing `#` and `0x`, there aren't 3 or 6 digits  |
/// | [`InvalidDigit`]    | The length is right, but a character isn't a hex digit   |
///
/// [`InvalidDigit`]: Self::InvalidDigit
/// [`InvalidLength`]: Self::InvalidLength
/// [`RgbColor::try_from_hex()`]: crate::RgbColor::try_from_hex
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum HexColorError {
    #[error("Hex color code '{input}' has {digit_count} digits, expected 3 or 6")]
    #[diagnostic(
        code(r3bl_rgb_color::hex::invalid_length),
        help("Use `#RGB` or `#RRGGBB`, eg: `#fba` or `#ff0009`")
    )]
    InvalidLength { input: String, digit_count: usize },

    #[error("Hex color code '{input}' contains a character that is not a hex digit")]
    #[diagnostic(
        code(r3bl_rgb_color::hex::invalid_digit),
        help("Only `0-9`, `a-f` and `A-F` are allowed between the `#` and `0x` markers")
    )]
    InvalidDigit { input: String },
}

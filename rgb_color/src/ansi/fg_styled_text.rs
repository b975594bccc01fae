// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ColorSupport, RgbColor, SgrCode, global_color_support};

/// Some text that is painted w/ a foreground [`RgbColor`] when it is displayed. It has two
/// fields:
/// - `text` - the text to print.
/// - `color` - the foreground color.
///
/// The escape sequences emitted by the [Display] implementation depend on
/// [`global_color_support::detect()`]:
/// - [`ColorSupport::Truecolor`] - `ESC[38;2;R;G;Bm`.
/// - [`ColorSupport::Ansi256`] - `ESC[38;5;Nm`, w/ the nearest palette index.
/// - [`ColorSupport::Grayscale`] - `ESC[38;5;Nm`, w/ the nearest gray.
/// - [`ColorSupport::NoColor`] - nothing, just the text.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_rgb_color::{ColorSupport, FgStyledText, RgbColor, global_color_support};
///
/// global_color_support::set_override(ColorSupport::Truecolor);
/// let it = FgStyledText::new("Hello", RgbColor::new(255, 0, 9));
/// assert_eq!(it.to_string(), "\x1b[38;2;255;0;9mHello\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FgStyledText<'a> {
    pub text: &'a str,
    pub color: RgbColor,
}

impl<'a> FgStyledText<'a> {
    #[must_use]
    pub fn new(text: &'a str, color: RgbColor) -> Self { Self { text, color } }
}

/// Returns [`None`] when color is turned off.
#[must_use]
pub fn fg_sgr_code(color: RgbColor, color_support: ColorSupport) -> Option<SgrCode> {
    match color_support {
        ColorSupport::Truecolor => {
            let RgbColor { red, green, blue } = color;
            Some(SgrCode::ForegroundRGB(red, green, blue))
        }
        ColorSupport::Ansi256 => Some(SgrCode::ForegroundAnsi256(color.as_ansi().index)),
        ColorSupport::Grayscale => {
            Some(SgrCode::ForegroundAnsi256(color.as_grayscale().index))
        }
        ColorSupport::NoColor => None,
    }
}

impl Display for FgStyledText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match fg_sgr_code(self.color, global_color_support::detect()) {
            Some(sgr_code) => write!(f, "{sgr_code}{}{}", self.text, SgrCode::Reset),
            None => write!(f, "{}", self.text),
        }
    }
}

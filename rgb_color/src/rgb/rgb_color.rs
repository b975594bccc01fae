// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color value. The operations on it are split across sibling
//! modules:
//! - [`super::hex_color_parser`] - construct from hex color codes.
//! - [`super::fade`] - linear interpolation toward other colors.
//! - [`super::rgb_print`] - print text using it as the foreground color.
//! - [`crate::ansi::convert`] - approximate it w/ the 256 color palette.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use crate::HexColorError;

/// Represents a color in RGB (24-bit truecolor) format. Each channel is a byte, so every
/// value of this type is a valid color.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue)
    }

    /// Each component saturates to `0..=255`, eg: `-20` becomes `0` and `300` becomes
    /// `255`.
    #[must_use]
    pub fn from_clamped(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_to_byte(red),
            green: clamp_to_byte(green),
            blue: clamp_to_byte(blue),
        }
    }

    /// Returns `(red, green, blue)`.
    #[must_use]
    pub const fn values(&self) -> (u8, u8, u8) { (self.red, self.green, self.blue) }

    /// Lower case `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String { self.to_string() }
}

fn clamp_to_byte(value: i32) -> u8 { u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX) }

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::new(red, green, blue) }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self { color.values() }
}

/// `0xRRGGBB`. The upper byte is ignored.
impl From<u32> for RgbColor {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl FromStr for RgbColor {
    type Err = HexColorError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_from_hex(input)
    }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, 0, 0)]
    #[test_case(255, 255, 255)]
    #[test_case(127, 127, 127)]
    #[test_case(1, 2, 3)]
    fn test_new(red: u8, green: u8, blue: u8) {
        let it = RgbColor::new(red, green, blue);
        assert_eq2!(it, RgbColor { red, green, blue });
        assert_eq2!(RgbColor::from_u8(red, green, blue), it);
    }

    #[test_case(RgbColor::new(0, 0, 0), (0, 0, 0) ; "zero")]
    #[test_case(RgbColor::new(255, 255, 255), (255, 255, 255) ; "max")]
    #[test_case(RgbColor::new(10, 20, 30), (10, 20, 30) ; "mixed")]
    fn test_values(color: RgbColor, expected: (u8, u8, u8)) {
        assert_eq2!(color.values(), expected);
        let tuple: (u8, u8, u8) = color.into();
        assert_eq2!(tuple, expected);
    }

    #[test]
    fn test_from_clamped() {
        assert_eq2!(
            RgbColor::from_clamped(-20, 128, 300),
            RgbColor::new(0, 128, 255)
        );
        assert_eq2!(
            RgbColor::from_clamped(i32::MIN, i32::MAX, 0),
            RgbColor::new(0, 255, 0)
        );
    }

    #[test]
    fn test_default_is_black() {
        assert_eq2!(RgbColor::default(), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_from_u32() {
        assert_eq2!(RgbColor::from(0x00ff_0009_u32), RgbColor::new(255, 0, 9));
        assert_eq2!(RgbColor::from(0xaa12_3456_u32), RgbColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_display_and_from_str() {
        let it = RgbColor::new(255, 0, 9);
        assert_eq2!(it.to_string(), "#ff0009");
        assert_eq2!(it.to_hex_string(), "#ff0009");
        assert_eq2!("#ff0009".parse::<RgbColor>(), Ok(it));
        assert!("nope".parse::<RgbColor>().is_err());
    }

    #[test]
    fn test_macro() {
        assert_eq2!(crate::rgb_color!(1, 2, 3), RgbColor::new(1, 2, 3));
        assert_eq2!(crate::rgb_color!(hex "#fba"), RgbColor::new(255, 187, 170));
        assert_eq2!(crate::rgb_color!(white), RgbColor::new(255, 255, 255));
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] so that tests get colorized diffs.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Create an [`RgbColor`](crate::RgbColor) from:
/// - component bytes: `rgb_color!(255, 0, 9)`.
/// - a hex literal: `rgb_color!(hex "#ff0009")`. This panics if the literal is invalid,
///   so use [`RgbColor::try_from_hex()`](crate::RgbColor::try_from_hex) for input that
///   comes from users.
/// - one of the named colors below, eg: `rgb_color!(lizard_green)`.
///
/// ```rust
/// use r3bl_rgb_color::{RgbColor, rgb_color};
///
/// assert_eq!(rgb_color!(255, 187, 170), rgb_color!(hex "#fba"));
/// assert_eq!(rgb_color!(lizard_green), RgbColor::new(20, 244, 0));
/// ```
#[macro_export]
macro_rules! rgb_color {
    (hex $input:expr) => {
        $crate::RgbColor::from_hex($input)
    };

    (black) => {
        $crate::RgbColor::new(0, 0, 0)
    };

    (white) => {
        $crate::RgbColor::new(255, 255, 255)
    };

    (medium_gray) => {
        $crate::RgbColor::new(193, 193, 193)
    };

    (hot_pink) => {
        $crate::RgbColor::new(255, 0, 214)
    };

    (lavender) => {
        $crate::RgbColor::new(203, 170, 250)
    };

    (lizard_green) => {
        $crate::RgbColor::new(20, 244, 0)
    };

    (frozen_blue) => {
        $crate::RgbColor::new(171, 204, 242)
    };

    (guards_red) => {
        $crate::RgbColor::new(200, 1, 1)
    };

    (sky_blue) => {
        $crate::RgbColor::new(117, 215, 236)
    };

    ($red:expr, $green:expr, $blue:expr $(,)?) => {
        $crate::RgbColor::new($red, $green, $blue)
    };
}

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Approximate an [`RgbColor`] w/ the 256 color ANSI palette, for terminals that don't
//! support truecolor.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use crate::RgbColor;

/// Represents a color in the ANSI 256-color palette format. Each index (0-255) maps to
/// a specific color in the palette.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }
}

impl RgbColor {
    /// Returns the index of the color in the 256 color ANSI palette that is closest to
    /// `self`.
    #[must_use]
    pub fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    /// Returns the index of a gray in the 256 color ANSI palette w/ the same luminance
    /// as `self`.
    #[must_use]
    pub fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(*self) }
}

mod ansi_constants {
    /// Indices 16-231 are a 6x6x6 cube, and these are the channel values of its axes.
    pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    pub const CUBE_START_INDEX: u8 = 16;
    pub const CUBE_WHITE_INDEX: u8 = 231;

    /// Indices 232-255 are a gray ramp from 8 to 238, in steps of 10.
    pub const GRAY_RAMP_START_INDEX: u8 = 232;
    pub const GRAY_RAMP_LEN: u8 = 24;
    pub const GRAY_RAMP_FIRST_LEVEL: u8 = 8;
    pub const GRAY_RAMP_STEP: u8 = 10;
}
use ansi_constants::{CUBE_LEVELS, CUBE_START_INDEX, CUBE_WHITE_INDEX, GRAY_RAMP_FIRST_LEVEL,
                     GRAY_RAMP_LEN, GRAY_RAMP_START_INDEX, GRAY_RAMP_STEP};

/// Picks whichever is closer to `rgb`: the nearest entry in the color cube, or the
/// nearest entry in the gray ramp. Ties go to the cube.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbColor) -> AnsiValue {
    let RgbColor { red, green, blue } = rgb;

    let cube_coords = [
        nearest_cube_coord(red),
        nearest_cube_coord(green),
        nearest_cube_coord(blue),
    ];
    let cube_rgb = RgbColor::new(
        CUBE_LEVELS[usize::from(cube_coords[0])],
        CUBE_LEVELS[usize::from(cube_coords[1])],
        CUBE_LEVELS[usize::from(cube_coords[2])],
    );
    let cube_index =
        CUBE_START_INDEX + 36 * cube_coords[0] + 6 * cube_coords[1] + cube_coords[2];

    let average = (u16::from(red) + u16::from(green) + u16::from(blue)) / 3;
    let gray_step = nearest_gray_step(average);
    let gray_level = GRAY_RAMP_FIRST_LEVEL + GRAY_RAMP_STEP * gray_step;
    let gray_rgb = RgbColor::new(gray_level, gray_level, gray_level);

    if distance_squared(rgb, cube_rgb) <= distance_squared(rgb, gray_rgb) {
        AnsiValue::new(cube_index)
    } else {
        AnsiValue::new(GRAY_RAMP_START_INDEX + gray_step)
    }
}

/// Maps the luminance of `rgb` onto the gray ramp. Pure black and pure white, which the
/// ramp doesn't contain, map to the corners of the color cube.
#[must_use]
pub fn convert_rgb_into_grayscale(rgb: RgbColor) -> AnsiValue {
    // ITU-R BT.601 luma.
    let luma = (299 * u32::from(rgb.red)
        + 587 * u32::from(rgb.green)
        + 114 * u32::from(rgb.blue))
        / 1000;
    let luma = u16::try_from(luma).unwrap_or(u16::MAX);

    let first_level = u16::from(GRAY_RAMP_FIRST_LEVEL);
    let last_level =
        first_level + u16::from(GRAY_RAMP_STEP) * u16::from(GRAY_RAMP_LEN - 1);

    if luma < first_level / 2 {
        AnsiValue::new(CUBE_START_INDEX)
    } else if luma > last_level + (255 - last_level) / 2 {
        AnsiValue::new(CUBE_WHITE_INDEX)
    } else {
        AnsiValue::new(GRAY_RAMP_START_INDEX + nearest_gray_step(luma))
    }
}

fn nearest_cube_coord(value: u8) -> u8 {
    let mut nearest = 0;
    for (coord, level) in (0_u8..).zip(CUBE_LEVELS) {
        let current_best = CUBE_LEVELS[usize::from(nearest)];
        if value.abs_diff(level) < value.abs_diff(current_best) {
            nearest = coord;
        }
    }
    nearest
}

/// Returns the step (0-23) in the gray ramp closest to `value`.
fn nearest_gray_step(value: u16) -> u8 {
    let first_level = u16::from(GRAY_RAMP_FIRST_LEVEL);
    let step = u16::from(GRAY_RAMP_STEP);
    let rounded = (value.saturating_sub(first_level) + step / 2) / step;
    let max_step = u16::from(GRAY_RAMP_LEN - 1);
    u8::try_from(rounded.min(max_step)).unwrap_or(GRAY_RAMP_LEN - 1)
}

fn distance_squared(lhs: RgbColor, rhs: RgbColor) -> u32 {
    let channel = |a: u8, b: u8| u32::from(a.abs_diff(b)).pow(2);
    channel(lhs.red, rhs.red) + channel(lhs.green, rhs.green) + channel(lhs.blue, rhs.blue)
}

// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns a hex color code into an [`RgbColor`].
//!
//! Accepted formats (digits are case insensitive):
//! - `RRGGBB`, eg: `ff0009` for (255, 0, 9).
//! - `RGB`, eg: `fba` which is short for `ffbbaa`.
//! - Either of the above w/ an optional `#` prefix, and an optional `0x` (or `0X`)
//!   suffix, eg: `#ff0009`, `ff00090x`, `#fba0X`.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

use crate::{HexColorError, RgbColor};

const HEX_PREFIX: &str = "#";
const HEX_SUFFIX_LOWER: &str = "0x";
const HEX_SUFFIX_UPPER: &str = "0X";

impl RgbColor {
    /// # Errors
    ///
    /// Returns [`HexColorError::InvalidLength`] if there aren't exactly 3 or 6 digits
    /// between the optional markers, and [`HexColorError::InvalidDigit`] if any of them
    /// is not a hex digit.
    pub fn try_from_hex(input: &str) -> Result<RgbColor, HexColorError> {
        parse_hex_color(input).inspect_err(|error| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Could not parse hex color", error = %error);
        })
    }

    /// # Panics
    ///
    /// This function will panic if the input string is not a valid hex color format. It
    /// is meant for literals, eg: in [`rgb_color!`](crate::rgb_color).
    #[must_use]
    pub fn from_hex(input: &str) -> RgbColor {
        match parse_hex_color(input) {
            Ok(color) => color,
            Err(error) => panic!("Invalid hex color format: {error}"),
        }
    }
}

/// Parse function that generates an [`RgbColor`] from a hex color code.
///
/// # Errors
///
/// See [`RgbColor::try_from_hex()`].
pub fn parse_hex_color(input: &str) -> Result<RgbColor, HexColorError> {
    let digits = strip_markers(input);

    let result = match digits.len() {
        6 => all_consuming(parse_long_form).parse(digits),
        3 => all_consuming(parse_short_form).parse(digits),
        digit_count => {
            return Err(HexColorError::InvalidLength {
                input: input.to_string(),
                digit_count,
            });
        }
    };

    match result {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(HexColorError::InvalidDigit {
            input: input.to_string(),
        }),
    }
}

/// Removes the optional `#` prefix and the optional `0x` suffix.
fn strip_markers(input: &str) -> &str {
    let without_prefix = match parse_prefix(input) {
        Ok((remainder, _)) => remainder,
        Err(_) => input,
    };

    without_prefix
        .strip_suffix(HEX_SUFFIX_LOWER)
        .or_else(|| without_prefix.strip_suffix(HEX_SUFFIX_UPPER))
        .unwrap_or(without_prefix)
}

fn parse_prefix(input: &str) -> IResult<&str, Option<&str>> {
    opt(tag(HEX_PREFIX)).parse(input)
}

/// `RRGGBB`.
fn parse_long_form(input: &str) -> IResult<&str, RgbColor> {
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// `RGB`, where each digit is doubled, eg: `a` is `aa`.
fn parse_short_form(input: &str) -> IResult<&str, RgbColor> {
    let (input, (red, green, blue)) = (
        helper_fns::parse_short_hex_seg,
        helper_fns::parse_short_hex_seg,
        helper_fns::parse_short_hex_seg,
    )
        .parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// Used by [`take_while_m_n`]; as long as it returns `true` items will be taken from
    /// the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    /// A single digit `N` is the same as `NN`, ie: `N * 17`.
    pub fn parse_short_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |digit: &str| {
            parse_str_to_hex_num(digit).map(|it| it * 17)
        })
        .parse(input)
    }
}

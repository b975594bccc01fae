// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Linear interpolation ("fade") of an [`RgbColor`] toward zero, one, or many target
//! colors, based on where a value sits inside a numeric range.
//!
//! With many targets, the range is split into equal segments, one per target:
//!
//! ```text
//! min                                                     max
//!  ├──── segment 0 ────┼──── segment 1 ────┼──── segment 2 ────┤
//!  self  →  targets[0]   targets[0] → [1]    targets[1] → [2]
//! ```

use crate::RgbColor;

type Number = f32;

impl RgbColor {
    /// Returns the color at position `current` inside `[min, max]`, fading from `self`
    /// through each of the `targets`, in order.
    ///
    /// - No targets: `self` is returned.
    /// - `current` is clamped into `[min, max]`, so at (or beyond) `max` the result is the
    ///   last target.
    /// - Only the offset of `current` from `min` matters, so negative ranges behave the
    ///   same as positive ones.
    /// - Channels are clamped into `0..=255` and truncated toward zero.
    /// - If `max <= min`, or any argument is NaN, `self` is returned.
    ///
    /// ```rust
    /// use r3bl_rgb_color::RgbColor;
    ///
    /// let black = RgbColor::new(0, 0, 0);
    /// let white = RgbColor::new(255, 255, 255);
    /// assert_eq!(black.fade(0.0, 100.0, 50.0, &[white]), RgbColor::new(127, 127, 127));
    /// assert_eq!(black.fade(-50.0, 50.0, 0.0, &[white]), RgbColor::new(127, 127, 127));
    /// assert_eq!(black.fade(0.0, 100.0, 50.0, &[]), black);
    /// ```
    #[must_use]
    pub fn fade(
        &self,
        min: Number,
        max: Number,
        current: Number,
        targets: &[RgbColor],
    ) -> RgbColor {
        // False for NaN as well.
        let is_valid_range = max > min;
        if targets.is_empty() || current.is_nan() || !is_valid_range {
            return *self;
        }

        let range = max - min;
        let position = current.clamp(min, max) - min;

        if position >= range {
            return targets.last().copied().unwrap_or(*self);
        }

        #[allow(clippy::cast_precision_loss)]
        let segment_width = range / targets.len() as Number;

        let mut from = *self;
        let mut offset = position;
        for target in targets {
            if offset < segment_width {
                return lerp(from, *target, offset, segment_width);
            }
            offset -= segment_width;
            from = *target;
        }

        // Rounding may leave `offset` a hair past the last segment.
        from
    }

    /// Returns `steps` colors, evenly spaced from `self` (first) to the last of the
    /// `targets` (last). Handy to color each line or character of some text.
    #[must_use]
    pub fn fade_steps(&self, steps: u16, targets: &[RgbColor]) -> Vec<RgbColor> {
        let max = Number::from(steps.saturating_sub(1));
        (0..steps)
            .map(|step| self.fade(0.0, max, Number::from(step), targets))
            .collect()
    }
}

/// `offset` is in `[0, width)`.
fn lerp(from: RgbColor, to: RgbColor, offset: Number, width: Number) -> RgbColor {
    RgbColor {
        red: lerp_channel(from.red, to.red, offset, width),
        green: lerp_channel(from.green, to.green, offset, width),
        blue: lerp_channel(from.blue, to.blue, offset, width),
    }
}

/// The slope is computed first, then scaled by `offset`. The order matters: in `f32` it
/// decides which side of an integer some results land on before truncation.
fn lerp_channel(from: u8, to: u8, offset: Number, width: Number) -> u8 {
    let from = Number::from(from);
    let to = Number::from(to);
    clamp_to_byte(from + ((to - from) / width) * offset)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_byte(value: Number) -> u8 { value.clamp(0.0, 255.0) as u8 }

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print text (or just produce a [String]) using an [`RgbColor`] as the foreground color.
//!
//! | Produces a [String]          | Writes to [`global_output_device`] |
//! |------------------------------|------------------------------------|
//! | [`RgbColor::sprint()`]       | [`RgbColor::print()`]              |
//! | [`RgbColor::sprintln()`]     | [`RgbColor::println()`]            |
//! | [`RgbColor::sprintf()`]      | [`RgbColor::printf()`]             |
//! | [`RgbColor::sprintfln()`]    | [`RgbColor::printfln()`]           |
//!
//! The `f` variants take [`std::fmt::Arguments`], which you can make w/
//! [`format_args!`]. The escape sequences depend on [`crate::global_color_support`].

use std::fmt::{Arguments, Display};

use crate::{FgStyledText, LockedOutputDevice, OutputDevice, RgbColor,
            global_output_device, lock_output_device_as_mut};

impl RgbColor {
    #[must_use]
    pub fn sprint(&self, arg: impl Display) -> String {
        let text = arg.to_string();
        FgStyledText::new(&text, *self).to_string()
    }

    /// The newline is added after the escape sequences, so it is never colored.
    #[must_use]
    pub fn sprintln(&self, arg: impl Display) -> String {
        let mut acc = self.sprint(arg);
        acc.push('\n');
        acc
    }

    /// ```rust
    /// use r3bl_rgb_color::{ColorSupport, RgbColor, global_color_support};
    ///
    /// global_color_support::set_override(ColorSupport::NoColor);
    /// let it = RgbColor::new(255, 0, 9).sprintf(format_args!("{}-{}", "a", 1));
    /// assert_eq!(it, "a-1");
    /// ```
    #[must_use]
    pub fn sprintf(&self, args: Arguments<'_>) -> String { self.sprint(args) }

    #[must_use]
    pub fn sprintfln(&self, args: Arguments<'_>) -> String { self.sprintln(args) }

    pub fn print(&self, arg: impl Display) -> &Self {
        write_to_global_output_device(&self.sprint(arg));
        self
    }

    pub fn println(&self, arg: impl Display) -> &Self {
        write_to_global_output_device(&self.sprintln(arg));
        self
    }

    pub fn printf(&self, args: Arguments<'_>) -> &Self {
        write_to_global_output_device(&self.sprintf(args));
        self
    }

    pub fn printfln(&self, args: Arguments<'_>) -> &Self {
        write_to_global_output_device(&self.sprintfln(args));
        self
    }

    /// Prints the error message on its own line, if `result` is an error. Prints nothing
    /// otherwise.
    pub fn print_on_error<T, E: Display>(&self, result: &Result<T, E>) -> &Self {
        if let Err(error) = result {
            self.println(error);
        }
        self
    }

    /// Same as [`Self::print_on_error()`], but `format` decides what the message is.
    ///
    /// ```rust
    /// use r3bl_rgb_color::RgbColor;
    ///
    /// let result: Result<(), &str> = Err("disk full");
    /// RgbColor::new(255, 0, 9).print_on_errorf(&result, |error| format!("oops: {error}"));
    /// ```
    pub fn print_on_errorf<T, E>(
        &self,
        result: &Result<T, E>,
        format: impl FnOnce(&E) -> String,
    ) -> &Self {
        if let Err(error) = result {
            self.println(format(error));
        }
        self
    }
}

/// Does nothing if [`global_output_device::is_output_enabled()`] is false. Write errors
/// are logged and then dropped.
fn write_to_global_output_device(text: &str) {
    if !global_output_device::is_output_enabled() {
        return;
    }

    let device = global_output_device::get();
    if let Err(error) = write_to_output_device(&device, text) {
        tracing::error!(
            message = "Failed to write to output device",
            is_mock = device.is_mock,
            error = ?error
        );
    }
}

fn write_to_output_device(device: &OutputDevice, text: &str) -> std::io::Result<()> {
    let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
    mut_ref.write_all(text.as_bytes())?;
    mut_ref.flush()
}

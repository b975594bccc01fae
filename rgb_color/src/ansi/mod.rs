// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything needed to paint text w/ a foreground color in the terminal:
//! - [`SgrCode`] - the escape sequences.
//! - [`global_color_support`] - what the terminal can display.
//! - [`AnsiValue`] - fallback for terminals w/out truecolor.
//! - [`FgStyledText`] - text + color, rendered via [`std::fmt::Display`].

// Attach.
pub mod convert;
pub mod detect_color_support;
pub mod fg_styled_text;
pub mod sgr_code;

// Re-export.
pub use convert::*;
pub use detect_color_support::*;
pub use fg_styled_text::*;
pub use sgr_code::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod fade;
pub mod hex_color_parser;
pub mod rgb_color;
pub mod rgb_print;

// Re-export.
pub use hex_color_parser::*;
pub use rgb_color::*;

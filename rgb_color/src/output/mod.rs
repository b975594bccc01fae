// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod output_device;

// Re-export.
pub use output_device::*;

// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

pub type SendWriter = dyn Write + Send;
pub type SafeWriter = Arc<Mutex<SendWriter>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use r3bl_rgb_color::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// This struct represents an output device that the print family of [`crate::RgbColor`]
/// writes to.
/// - It is safe to clone.
/// - To write to it, see the examples in [`Self::lock()`] or
///   [`lock_output_device_as_mut`] macro.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeWriter,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(Mutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(Mutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// Locks the output device for writing. To use it, use the following code:
    ///
    /// ```
    /// use r3bl_rgb_color::{OutputDevice, LockedOutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    ///
    /// If a thread panicked while holding the lock, the poison is ignored and the writer
    /// is handed out anyway.
    pub fn lock(&self) -> MutexGuard<'_, SendWriter> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Each write locks the device, so a clone can be handed to code that wants an owned
/// writer, eg: a [`tracing_subscriber::fmt::MakeWriter`].
impl Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.lock().flush() }
}

/// The process wide [`OutputDevice`] used by the print family, and a switch to silence
/// it. Stdout is used unless an override is set.
pub mod global_output_device {
    use std::sync::{Mutex, PoisonError,
                    atomic::{AtomicBool, Ordering}};

    use super::OutputDevice;

    static OUTPUT_DEVICE_OVERRIDE: Mutex<Option<OutputDevice>> = Mutex::new(None);
    static OUTPUT_ENABLED: AtomicBool = AtomicBool::new(true);

    /// Returns the override if one is set, otherwise stdout.
    #[must_use]
    pub fn get() -> OutputDevice {
        OUTPUT_DEVICE_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(OutputDevice::new_stdout)
    }

    pub fn set_override(device: OutputDevice) {
        *OUTPUT_DEVICE_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(device);
    }

    pub fn clear_override() {
        *OUTPUT_DEVICE_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn disable_output() { OUTPUT_ENABLED.store(false, Ordering::SeqCst); }

    pub fn enable_output() { OUTPUT_ENABLED.store(true, Ordering::SeqCst); }

    #[must_use]
    pub fn is_output_enabled() -> bool { OUTPUT_ENABLED.load(Ordering::SeqCst) }
}

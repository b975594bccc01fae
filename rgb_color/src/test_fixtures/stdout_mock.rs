// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock_buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock_buffer().clone() }

    /// Invalid UTF-8 is replaced w/ `U+FFFD`.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&buffer_data).into_owned()
    }

    pub fn clear(&self) { self.lock_buffer().clear(); }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_stdout_mock_no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        // Points to the same inner value as `stdout_mock`.
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";

        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq2!(stdout_mock_clone.get_copy_of_buffer_as_string(), normal_text);
        assert_eq2!(stdout_mock.get_copy_of_buffer(), normal_text.as_bytes().to_vec());
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::new();
        let stdout_mock_clone = stdout_mock.clone();

        let normal_text = "hello world";
        let orange_text = format!("\x1b[38;2;255;128;0m{normal_text}\x1b[0m");

        stdout_mock.write_all(orange_text.as_bytes()).unwrap();

        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            normal_text
        );
        assert_eq2!(stdout_mock_clone.get_copy_of_buffer_as_string(), orange_text);
    }

    #[test]
    fn test_stdout_mock_clear() {
        let mut stdout_mock = StdoutMock::new();
        stdout_mock.write_all(b"hello").unwrap();
        stdout_mock.clear();
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }
}

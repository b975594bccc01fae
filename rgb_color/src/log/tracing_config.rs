// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. The library only emits [`tracing`] events
//! (eg: hex parse failures, color support detection, failed writes). Nothing is shown
//! unless a subscriber is installed, using [`try_initialize_logging_global()`] or
//! [`TracingConfig::install_thread_local()`].

use std::{fmt::Debug, path::PathBuf};

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::OutputDevice;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout, stderr, or an [`OutputDevice`],
/// 3. both.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// `String` is the path of the log file, eg: `/tmp/rgbfade.log` or `rgbfade.log`.
#[derive(Debug, Clone)]
pub enum WriterConfig {
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    OutputDevice(OutputDevice),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::OutputDevice(device) => {
                write!(f, "OutputDevice {{ is_mock: {} }}", device.is_mock)
            }
        }
    }
}

pub const DEFAULT_LOG_FILE_NAME: &str = "rgbfade_log.txt";

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed. This is
    /// great for apps.
    ///
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(&self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Thread local subscriber, which is removed when the returned guard is dropped. This
    /// is great for tests.
    ///
    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(&self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// Does nothing if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// See [`TracingConfig::install_global()`].
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    if matches!(tracing_config.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }
    tracing_config.install_global()
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
    };
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];
    acc.push(Box::new(level_filter));
    if let Some(layer) = create_display_layer(level_filter, &writer_config) {
        acc.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        acc.push(layer);
    }
    Ok(acc)
}

fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            DisplayPreference::OutputDevice(device) => {
                let device = device.clone();
                Some(Box::new(
                    fmt_layer
                        .with_ansi(false)
                        .with_writer(move || device.clone())
                        .with_filter(level_filter),
                ))
            }
        },
        WriterConfig::File(_) => None,
    }
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
            let file = try_create_file_appender(path)?;
            Ok(Some(Box::new(
                create_fmt!()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::Display(_) => Ok(None),
    }
}

/// The file is never rotated.
fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of log file {}. It might not exist, or you don't \
             have the required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't get the file name of log file {}.", path.display())
    })?;

    tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{OutputDeviceExt, RgbColor, assert_eq2};

    fn temp_log_file_path(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!(
            "r3bl_rgb_color_test_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_create_display_layer() {
        let writer_config = WriterConfig::Display(DisplayPreference::Stdout);
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            create_display_layer(LevelFilter::DEBUG, &writer_config);
        assert!(layer.is_some());

        let writer_config = WriterConfig::File("unused.log".to_string());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            create_display_layer(LevelFilter::DEBUG, &writer_config);
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let file_path = temp_log_file_path("file_layer.log");
        let writer_config = WriterConfig::File(file_path.clone());
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &writer_config).unwrap();

        assert!(layer.is_some());
        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let file_path = temp_log_file_path("both_layers.log");
        let tracing_config = TracingConfig::new_file_and_display(
            Some(file_path.clone()),
            DisplayPreference::Stderr,
        );

        let layers = try_create_layers(&tracing_config).unwrap();
        assert_eq2!(layers.len(), 3);
        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_display_preference_debug() {
        let (device, _) = OutputDevice::new_mock();
        assert_eq2!(
            format!("{:?}", DisplayPreference::OutputDevice(device)),
            "OutputDevice { is_mock: true }"
        );
        assert_eq2!(format!("{:?}", DisplayPreference::Stderr), "Stderr");
    }

    #[test]
    fn test_try_initialize_logging_global_off_is_noop() {
        let tracing_config = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stdout),
            level_filter: LevelFilter::OFF,
        };
        assert!(try_initialize_logging_global(tracing_config).is_ok());
    }

    #[test]
    fn test_thread_local_output() {
        let (device, mock) = OutputDevice::new_mock();
        let default_guard = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::OutputDevice(device)),
            level_filter: LevelFilter::INFO,
        }
        .install_thread_local()
        .unwrap();

        tracing::error!("error");
        tracing::warn!("warn");
        tracing::info!("info");
        tracing::debug!("debug");

        drop(default_guard);
        tracing::error!("not captured");

        let output = mock.get_copy_of_buffer_as_string();
        assert!(output.contains("ERROR"));
        assert!(output.contains("error"));
        assert!(output.contains("warn"));
        assert!(output.contains("info"));
        assert!(!output.contains("debug"));
        assert!(!output.contains("not captured"));
    }

    #[test]
    fn test_hex_parse_failure_is_logged() {
        let (device, mock) = OutputDevice::new_mock();
        let default_guard =
            TracingConfig::new_display(DisplayPreference::OutputDevice(device))
                .install_thread_local()
                .unwrap();

        assert!(RgbColor::try_from_hex("#fax").is_err());

        drop(default_guard);
        assert!(mock.get_copy_of_buffer_as_string().contains("#fax"));
    }
}

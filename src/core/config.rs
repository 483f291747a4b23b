//! Instance-wide logging defaults

use super::timestamp::TimeFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Instance defaults, resolved against per-call overrides on every submit.
///
/// Fields are public and mutable for the logger's lifetime; each submit
/// reads whatever is current. Do not mutate concurrently with in-flight
/// submits on a shared instance.
///
/// `max_display_lines` bounds the display history; `None` disables the
/// bound entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Write lines to the display sink at all.
    pub write_to_display: bool,
    /// Write lines to the log file by default.
    pub write_to_file: bool,
    /// Let debug lines reach the display (off by default; debug is
    /// file-bound unless explicitly surfaced).
    pub write_debug_to_display: bool,
    /// Let debug lines reach the file even when `write_to_file` is off.
    pub write_debug_to_file: bool,
    /// Prefix every line with a timestamp.
    pub show_time: bool,
    /// Prefix debug lines with a timestamp even when `show_time` is off.
    pub show_time_in_debug: bool,
    /// Timestamp pattern, fixed at construction from the date-inclusion
    /// flag or a custom pattern. Replaceable afterwards like any field.
    pub time_format: TimeFormat,
    /// Prefix lines with the severity label from the style map.
    pub prepend_severity_label: bool,
    /// Display history bound; `None` = unbounded.
    pub max_display_lines: Option<usize>,
    /// Default log file path.
    pub file_name: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            write_to_display: true,
            write_to_file: true,
            write_debug_to_display: false,
            write_debug_to_file: true,
            show_time: true,
            show_time_in_debug: true,
            time_format: TimeFormat::default(),
            prepend_severity_label: false,
            max_display_lines: Some(1000),
            file_name: PathBuf::from("log.txt"),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

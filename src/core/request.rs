//! Per-call log requests and rendered output lines

use super::color::Color;
use super::severity::Severity;
use super::timestamp::TimeFormat;
use std::path::PathBuf;

/// A fully rendered line, ready for a sink. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub color: Color,
}

impl RenderedLine {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// One log call: a message template, its arguments, a severity, and an
/// optional override for each instance default.
///
/// Override resolution is per-field, not all-or-nothing: a request may
/// override `show_time` while leaving file routing at the instance
/// default. `None` always means "inherit".
///
/// Arguments fill `{0}`..`{N}` placeholders in the template. A request
/// with no arguments passes its template through verbatim, so plain
/// messages never trip placeholder parsing.
///
/// # Example
///
/// ```
/// use logpane::{LogRequest, Severity, TimeFormat};
///
/// let request = LogRequest::new("user {0} logged in from {1}")
///     .arg("alice")
///     .arg("10.0.0.7")
///     .severity(Severity::Info)
///     .show_time(false)
///     .write_to_file(false);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogRequest {
    pub template: String,
    pub args: Vec<String>,
    pub severity: Severity,
    pub prepend_label: Option<bool>,
    pub label: Option<String>,
    pub show_time: Option<bool>,
    pub show_date: Option<bool>,
    pub time_format: Option<TimeFormat>,
    pub write_to_file: Option<bool>,
    pub file_name: Option<PathBuf>,
    pub write_to_display: Option<bool>,
    pub color: Option<Color>,
}

impl LogRequest {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Append one positional argument.
    #[must_use = "builder methods return a new value"]
    pub fn arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Append a sequence of positional arguments.
    #[must_use = "builder methods return a new value"]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prepend_label(mut self, prepend: bool) -> Self {
        self.prepend_label = Some(prepend);
        self
    }

    /// Override the prefix label text for this call only.
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = Some(show);
        self
    }

    /// Override date inclusion: `true` forces the full date+time pattern,
    /// `false` the time-only pattern. An explicit `time_format` wins.
    #[must_use = "builder methods return a new value"]
    pub fn show_date(mut self, show: bool) -> Self {
        self.show_date = Some(show);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = Some(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_to_file(mut self, write: bool) -> Self {
        self.write_to_file = Some(write);
        self
    }

    /// Route this call's file write to a different path.
    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_to_display(mut self, write: bool) -> Self {
        self.write_to_display = Some(write);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

//! Main logger implementation

use super::bounded::BoundedDisplay;
use super::config::LoggerConfig;
use super::color::Color;
use super::dispatch::Dispatcher;
use super::error::{ErrorLog, LoggerError};
use super::format::{resolve, ResolvedWrite};
use super::request::{LogRequest, RenderedLine};
use super::severity::Severity;
use super::sink::DisplaySink;
use super::style::StyleMap;
use super::timestamp::TimeFormat;
use crate::sinks::FileSink;
use chrono::Local;
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

/// The logging core: resolves each request against instance defaults and
/// writes the rendered line to the display and/or file sink.
///
/// `submit` never panics out and never returns error values directly; it
/// reports an aggregate `bool` and records detail in the [`ErrorLog`].
/// The display and file writes are isolated from each other: one failing
/// does not suppress the attempt on the other.
///
/// # Example
///
/// ```
/// use logpane::{Logger, LogRequest, MemoryDisplay};
///
/// let display = MemoryDisplay::new();
/// let logger = Logger::builder()
///     .display(display.clone())
///     .write_to_file(false)
///     .build();
///
/// assert!(logger.submit(LogRequest::new("Hello {0}").arg("world")));
/// assert!(display.texts()[0].ends_with(": Hello world"));
/// ```
pub struct Logger {
    config: LoggerConfig,
    styles: StyleMap,
    display: Arc<Mutex<Option<BoundedDisplay>>>,
    errors: Arc<ErrorLog>,
    dispatcher: Option<Dispatcher>,
}

impl Logger {
    /// A logger with default configuration and no display sink attached.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Instance defaults, mutable for the logger's lifetime. Requires
    /// exclusive access, so config changes cannot race in-flight submits.
    pub fn config_mut(&mut self) -> &mut LoggerConfig {
        &mut self.config
    }

    #[must_use]
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.styles
    }

    /// The failure queue. Never cleared by the core; drain it for detail
    /// after a submit returns `false`.
    #[must_use]
    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    /// Lines currently held by the display sink, if one is attached.
    #[must_use]
    pub fn display_line_count(&self) -> usize {
        self.display.lock().as_ref().map_or(0, BoundedDisplay::line_count)
    }

    /// Log one request.
    ///
    /// Returns `true` when no failure occurred, including the trivial case
    /// where the resolved routing targets no sink at all. Returns `false`
    /// when any failure was recorded; see [`Logger::errors`].
    pub fn submit(&self, request: LogRequest) -> bool {
        let resolved = match resolve(&self.config, &self.styles, &request, Local::now()) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => return true,
            Err(err) => {
                self.errors.push(err);
                return false;
            }
        };

        let capacity = self.config.max_display_lines;
        let display = Arc::clone(&self.display);
        let errors = Arc::clone(&self.errors);

        match &self.dispatcher {
            Some(dispatcher) => {
                match dispatcher.invoke(move || write_sinks(&display, &errors, resolved, capacity))
                {
                    Ok(ok) => ok,
                    Err(err) => {
                        self.errors.push(err);
                        false
                    }
                }
            }
            None => write_sinks(&display, &errors, resolved, capacity),
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> bool {
        self.submit(LogRequest::new(message).severity(Severity::DebugLog))
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> bool {
        self.submit(LogRequest::new(message).severity(Severity::Info))
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> bool {
        self.submit(LogRequest::new(message).severity(Severity::Warning))
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> bool {
        self.submit(LogRequest::new(message).severity(Severity::Error))
    }

    #[inline]
    pub fn custom(&self, message: impl Into<String>) -> bool {
        self.submit(LogRequest::new(message).severity(Severity::Custom))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform the targeted writes inside one serialized region.
///
/// The display lock is held across both writes so display and file
/// mutations for this instance never interleave. Each write is isolated:
/// a failure (or a panicking display sink) is recorded and the other
/// write still runs.
fn write_sinks(
    display: &Mutex<Option<BoundedDisplay>>,
    errors: &ErrorLog,
    resolved: ResolvedWrite,
    capacity: Option<usize>,
) -> bool {
    let mut ok = true;
    let mut guard = display.lock();

    if resolved.write_to_display {
        if let Some(bounded) = guard.as_mut() {
            bounded.set_capacity(capacity);
            let line = RenderedLine::new(resolved.text.clone(), resolved.color);
            match catch_unwind(AssertUnwindSafe(|| bounded.append(&line))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    errors.push(err);
                    ok = false;
                }
                Err(panic_info) => {
                    errors.push(LoggerError::display(panic_message(&panic_info)));
                    ok = false;
                }
            }
        }
    }

    if resolved.write_to_file {
        if let Err(err) = FileSink::append(&resolved.file_name, &resolved.text) {
            errors.push(err);
            ok = false;
        }
    }

    ok
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("display sink panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("display sink panicked: {s}")
    } else {
        "display sink panicked".to_string()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use logpane::{Color, Logger, MemoryDisplay, Severity};
///
/// let logger = Logger::builder()
///     .display(MemoryDisplay::new())
///     .write_to_file(false)
///     .max_display_lines(200)
///     .prepend_severity_label(true)
///     .severity_label(Severity::Custom, "[App]")
///     .severity_color(Severity::Custom, Color::rgb(200, 120, 0))
///     .build();
/// logger.custom("styled line");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    styles: StyleMap,
    custom_time_format: Option<String>,
    show_date: bool,
    display: Option<Box<dyn DisplaySink>>,
    dispatcher: Option<Dispatcher>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            styles: StyleMap::default(),
            custom_time_format: None,
            show_date: true,
            display: None,
            dispatcher: None,
        }
    }

    /// Attach the display sink lines are shown on. Without one, display
    /// writes are silently skipped.
    #[must_use = "builder methods return a new value"]
    pub fn display<S: DisplaySink + 'static>(mut self, sink: S) -> Self {
        self.display = Some(Box::new(sink));
        self
    }

    /// Route sink mutations through a dispatch thread; each submit blocks
    /// until its writes have run there.
    #[must_use = "builder methods return a new value"]
    pub fn dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_to_display(mut self, write: bool) -> Self {
        self.config.write_to_display = write;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_to_file(mut self, write: bool) -> Self {
        self.config.write_to_file = write;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_debug_to_display(mut self, write: bool) -> Self {
        self.config.write_debug_to_display = write;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn write_debug_to_file(mut self, write: bool) -> Self {
        self.config.write_debug_to_file = write;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_name = path.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_time(mut self, show: bool) -> Self {
        self.config.show_time = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_time_in_debug(mut self, show: bool) -> Self {
        self.config.show_time_in_debug = show;
        self
    }

    /// Include the date in the instance timestamp pattern (on by default).
    /// Ignored when a custom pattern is set.
    #[must_use = "builder methods return a new value"]
    pub fn show_date(mut self, show: bool) -> Self {
        self.show_date = show;
        self
    }

    /// Use a custom strftime pattern for the instance timestamp.
    #[must_use = "builder methods return a new value"]
    pub fn custom_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.custom_time_format = Some(pattern.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prepend_severity_label(mut self, prepend: bool) -> Self {
        self.config.prepend_severity_label = prepend;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_display_lines(mut self, lines: usize) -> Self {
        self.config.max_display_lines = Some(lines);
        self
    }

    /// Remove the display history bound entirely.
    #[must_use = "builder methods return a new value"]
    pub fn unbounded_display(mut self) -> Self {
        self.config.max_display_lines = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn severity_color(mut self, severity: Severity, color: Color) -> Self {
        self.styles.get_mut(severity).color = color;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn severity_label(mut self, severity: Severity, label: impl Into<String>) -> Self {
        self.styles.get_mut(severity).label = label.into();
        self
    }

    pub fn build(self) -> Logger {
        let mut config = self.config;
        config.time_format = TimeFormat::from_options(self.custom_time_format, self.show_date);

        let display = self
            .display
            .map(|sink| BoundedDisplay::new(sink, config.max_display_lines));

        Logger {
            config,
            styles: self.styles,
            display: Arc::new(Mutex::new(display)),
            errors: Arc::new(ErrorLog::new()),
            dispatcher: self.dispatcher,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemoryDisplay;

    fn display_logger() -> (MemoryDisplay, Logger) {
        let display = MemoryDisplay::new();
        let logger = Logger::builder()
            .display(display.clone())
            .write_to_file(false)
            .write_debug_to_file(false)
            .build();
        (display, logger)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::new();
        assert!(logger.config().write_to_file);
        assert_eq!(logger.config().time_format, TimeFormat::DateTime);
        assert_eq!(logger.display_line_count(), 0);
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn test_builder_time_format_from_options() {
        let logger = Logger::builder().show_date(false).build();
        assert_eq!(logger.config().time_format, TimeFormat::TimeOnly);

        let logger = Logger::builder()
            .show_date(false)
            .custom_time_format("%H")
            .build();
        assert_eq!(
            logger.config().time_format,
            TimeFormat::Custom("%H".into())
        );
    }

    #[test]
    fn test_submit_reaches_display() {
        let (display, logger) = display_logger();
        assert!(logger.info("hello"));
        assert_eq!(display.len(), 1);
        assert!(display.texts()[0].ends_with(": hello"));
        assert_eq!(display.lines()[0].color, Color::BLUE);
    }

    #[test]
    fn test_no_display_attached_is_a_quiet_no_op() {
        let logger = Logger::builder().write_to_file(false).build();
        assert!(logger.info("nowhere to go"));
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn test_format_error_recorded_and_reported() {
        let (display, logger) = display_logger();
        let ok = logger.submit(LogRequest::new("Hello {2}").arg("only one"));
        assert!(!ok);
        assert!(display.is_empty());
        assert_eq!(logger.errors().len(), 1);
        assert!(matches!(
            logger.errors().pop().unwrap(),
            LoggerError::Format { .. }
        ));
    }

    #[test]
    fn test_failing_display_does_not_stop_file_write() {
        struct Failing;
        impl DisplaySink for Failing {
            fn append(&mut self, _line: &RenderedLine) -> crate::core::error::Result<()> {
                Err(LoggerError::display("widget gone"))
            }
            fn line_count(&self) -> usize {
                0
            }
            fn remove_oldest(&mut self) {}
            fn name(&self) -> &str {
                "failing"
            }
        }

        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("isolated.log");
        let logger = Logger::builder()
            .display(Failing)
            .file_name(&path)
            .build();

        assert!(!logger.info("still filed"));
        assert_eq!(logger.errors().len(), 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("still filed"));
    }

    #[test]
    fn test_panicking_display_is_contained() {
        struct Panicking;
        impl DisplaySink for Panicking {
            fn append(&mut self, _line: &RenderedLine) -> crate::core::error::Result<()> {
                panic!("widget exploded");
            }
            fn line_count(&self) -> usize {
                0
            }
            fn remove_oldest(&mut self) {}
            fn name(&self) -> &str {
                "panicking"
            }
        }

        let logger = Logger::builder()
            .display(Panicking)
            .write_to_file(false)
            .write_debug_to_file(false)
            .build();

        assert!(!logger.info("boom"));
        let err = logger.errors().pop().unwrap();
        assert!(err.to_string().contains("widget exploded"));
    }

    #[test]
    fn test_capacity_lowered_at_runtime() {
        let (display, mut logger) = display_logger();
        for i in 0..5 {
            logger.info(format!("line {i}"));
        }
        assert_eq!(display.len(), 5);

        logger.config_mut().max_display_lines = Some(2);
        logger.info("after shrink");
        assert_eq!(display.len(), 2);
        assert!(display.texts()[1].ends_with("after shrink"));
    }

    #[test]
    fn test_style_mutation_applies_to_later_submits() {
        let (display, mut logger) = display_logger();
        logger.styles_mut().get_mut(Severity::Info).color = Color::rgb(1, 1, 1);
        logger.info("recolored");
        assert_eq!(display.lines()[0].color, Color::rgb(1, 1, 1));
    }

    #[test]
    fn test_dispatcher_round_trip() {
        let display = MemoryDisplay::new();
        let logger = Logger::builder()
            .display(display.clone())
            .write_to_file(false)
            .dispatcher(Dispatcher::new())
            .build();

        assert!(logger.info("via dispatch"));
        assert_eq!(display.len(), 1);
    }
}

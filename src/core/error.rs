//! Error types and the caller-inspectable failure queue

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Template/argument mismatch during message substitution
    #[error("format error in '{template}': {message}")]
    Format { template: String, message: String },

    /// Display sink append failure (including a panicking sink)
    #[error("display sink error: {0}")]
    Display(String),

    /// File create/append failure with path context
    #[error("file sink error for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dispatch worker is gone; the write could not be marshaled
    #[error("dispatcher stopped")]
    DispatcherStopped,
}

impl LoggerError {
    /// Create a format error with template context
    pub fn format(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Format {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a display sink error
    pub fn display(message: impl Into<String>) -> Self {
        LoggerError::Display(message.into())
    }

    /// Create a file I/O error with path context
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// FIFO queue of submit failures.
///
/// The core appends; it never clears. Owners drain explicitly when they
/// want detail beyond the aggregate `bool` a submit returns. Append and
/// drain are safe from any thread.
///
/// # Example
///
/// ```
/// use logpane::Logger;
///
/// let logger = Logger::new();
/// logger.submit(logpane::LogRequest::new("{3}").arg("only one"));
/// for err in logger.errors().drain() {
///     eprintln!("logging failure: {err}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct ErrorLog {
    queue: Mutex<VecDeque<LoggerError>>,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, err: LoggerError) {
        self.queue.lock().push_back(err);
    }

    /// Remove and return the oldest recorded failure.
    pub fn pop(&self) -> Option<LoggerError> {
        self.queue.lock().pop_front()
    }

    /// Remove and return all recorded failures, oldest first.
    pub fn drain(&self) -> Vec<LoggerError> {
        self.queue.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

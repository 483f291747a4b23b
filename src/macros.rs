//! Logging macros for ergonomic request construction.
//!
//! Each macro builds a [`LogRequest`](crate::LogRequest) from a template
//! and positional arguments and submits it, returning the submit's `bool`.
//!
//! # Examples
//!
//! ```
//! use logpane::{Logger, MemoryDisplay};
//! use logpane::info;
//!
//! let display = MemoryDisplay::new();
//! let logger = Logger::builder()
//!     .display(display.clone())
//!     .write_to_file(false)
//!     .build();
//!
//! // Plain message
//! info!(logger, "Server started");
//!
//! // Positional arguments fill {0}, {1}, ...
//! info!(logger, "Listening on {0}:{1}", "0.0.0.0", 8080);
//! assert!(display.texts()[1].ends_with("Listening on 0.0.0.0:8080"));
//! ```

/// Submit a request at an explicit severity.
///
/// # Examples
///
/// ```
/// # use logpane::{Logger, Severity};
/// # let logger = Logger::builder().write_to_file(false).build();
/// use logpane::log;
/// log!(logger, Severity::Warning, "disk {0}% full", 93);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.submit(
            $crate::LogRequest::new($template)
                .severity($severity)
                $(.arg($arg))*
        )
    };
}

/// Submit a debug request. Debug lines stay off the display unless the
/// instance (or the call) says otherwise.
///
/// # Examples
///
/// ```
/// # use logpane::Logger;
/// # let logger = Logger::builder().write_to_file(false).write_debug_to_file(false).build();
/// use logpane::debug;
/// debug!(logger, "cache warmed in {0}ms", 12);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::DebugLog, $($arg)+)
    };
}

/// Submit an info request.
///
/// # Examples
///
/// ```
/// # use logpane::Logger;
/// # let logger = Logger::builder().write_to_file(false).build();
/// use logpane::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {0} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Submit a warning request.
///
/// # Examples
///
/// ```
/// # use logpane::Logger;
/// # let logger = Logger::builder().write_to_file(false).build();
/// use logpane::warning;
/// warning!(logger, "Retry attempt {0} of {1}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Submit an error request.
///
/// # Examples
///
/// ```
/// # use logpane::Logger;
/// # let logger = Logger::builder().write_to_file(false).build();
/// use logpane::error;
/// error!(logger, "Failed to connect to {0}", "db-primary");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Submit a custom-severity request.
///
/// # Examples
///
/// ```
/// # use logpane::Logger;
/// # let logger = Logger::builder().write_to_file(false).build();
/// use logpane::custom;
/// custom!(logger, "deploy finished");
/// ```
#[macro_export]
macro_rules! custom {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Custom, $($arg)+)
    };
}

//! # Logpane
//!
//! A display- and file-backed logging core with per-call formatting
//! overrides and a bounded in-memory line history.
//!
//! ## Features
//!
//! - **Layered configuration**: instance defaults with per-field,
//!   per-call overrides
//! - **Five fixed severities** with configurable colors and labels
//! - **Bounded display history**: strict FIFO eviction, runtime-adjustable
//! - **Dual-sink writes**: display and file attempts are isolated;
//!   failures land in an inspectable queue, never in a panic
//!
//! ## Example
//!
//! ```
//! use logpane::{Logger, LogRequest, MemoryDisplay, Severity};
//!
//! let display = MemoryDisplay::new();
//! let logger = Logger::builder()
//!     .display(display.clone())
//!     .write_to_file(false)
//!     .max_display_lines(500)
//!     .build();
//!
//! logger.info("starting up");
//! logger.submit(
//!     LogRequest::new("worker {0} done")
//!         .arg(3)
//!         .severity(Severity::Custom)
//!         .show_time(false),
//! );
//!
//! assert_eq!(display.texts()[1], "worker 3 done");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BoundedDisplay, Color, Dispatcher, DisplaySink, ErrorLog, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerRegistry, LogRequest, RenderedLine, Result, Severity,
        SeverityStyle, StyleMap, TimeFormat,
    };
    pub use crate::sinks::{FileSink, MemoryDisplay};
    #[cfg(feature = "terminal")]
    pub use crate::sinks::TerminalDisplay;
}

pub use core::{
    render_template, resolve, BoundedDisplay, Color, Dispatcher, DisplaySink, ErrorLog, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerRegistry, LogRequest, RenderedLine,
    ResolvedWrite, Result, Severity, SeverityStyle, StyleMap, TimeFormat,
};
pub use sinks::{FileSink, MemoryDisplay};
#[cfg(feature = "terminal")]
pub use sinks::TerminalDisplay;

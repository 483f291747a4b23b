//! Core logger types and traits

pub mod bounded;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod logger;
pub mod registry;
pub mod request;
pub mod severity;
pub mod sink;
pub mod style;
pub mod timestamp;

pub use bounded::BoundedDisplay;
pub use color::Color;
pub use config::LoggerConfig;
pub use dispatch::Dispatcher;
pub use error::{ErrorLog, LoggerError, Result};
pub use format::{render_template, resolve, ResolvedWrite};
pub use logger::{Logger, LoggerBuilder};
pub use registry::LoggerRegistry;
pub use request::{LogRequest, RenderedLine};
pub use severity::Severity;
pub use sink::DisplaySink;
pub use style::{SeverityStyle, StyleMap};
pub use timestamp::TimeFormat;

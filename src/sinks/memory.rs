//! In-memory display sink backed by a shared buffer

use crate::core::error::Result;
use crate::core::request::RenderedLine;
use crate::core::sink::DisplaySink;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// A display sink that holds lines in memory.
///
/// Clones share the same buffer, so a caller can keep one handle for
/// inspection while the logger owns another. This is the sink to use in
/// tests and anywhere a host application wants to pull rendered lines
/// into its own widget on its own schedule.
///
/// # Example
///
/// ```
/// use logpane::{Logger, MemoryDisplay};
///
/// let display = MemoryDisplay::new();
/// let logger = Logger::builder()
///     .display(display.clone())
///     .write_to_file(false)
///     .build();
/// logger.info("ready");
/// assert_eq!(display.len(), 1);
/// assert!(display.texts()[0].ends_with(": ready"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    lines: Arc<Mutex<VecDeque<RenderedLine>>>,
}

impl MemoryDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the held lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<RenderedLine> {
        self.lines.lock().iter().cloned().collect()
    }

    /// Snapshot of the held line texts, oldest first.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lines.lock().iter().map(|l| l.text.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop all held lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DisplaySink for MemoryDisplay {
    fn append(&mut self, line: &RenderedLine) -> Result<()> {
        self.lines.lock().push_back(line.clone());
        Ok(())
    }

    fn line_count(&self) -> usize {
        self.lines.lock().len()
    }

    fn remove_oldest(&mut self) {
        self.lines.lock().pop_front();
    }

    fn name(&self) -> &str {
        "memory"
    }
}

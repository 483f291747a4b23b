//! Display sink trait: the seam to whatever shows log lines

use super::error::Result;
use super::request::RenderedLine;

/// A destination that shows rendered lines, one append at a time.
///
/// The concrete display technology (terminal, GUI text pane, in-memory
/// capture, nothing at all) is irrelevant to the core; it only needs
/// append, a current line count, and oldest-first removal so the bounded
/// history can evict.
///
/// Implementations run inside the logger's serialized write region and
/// must not assume any particular calling thread unless paired with a
/// [`Dispatcher`](crate::Dispatcher).
pub trait DisplaySink: Send {
    /// Show one line. Failures are reported, not swallowed; the logger
    /// records them and keeps going.
    fn append(&mut self, line: &RenderedLine) -> Result<()>;

    /// Number of lines currently held.
    fn line_count(&self) -> usize;

    /// Drop the oldest held line. A sink that cannot shrink may leave the
    /// count unchanged; eviction gives up rather than spinning.
    fn remove_oldest(&mut self);

    fn name(&self) -> &str;
}

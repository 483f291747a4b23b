//! Bounded display history with FIFO eviction

use super::error::Result;
use super::request::RenderedLine;
use super::sink::DisplaySink;

/// Wraps a display sink with a maximum retained-line count.
///
/// After every append the history is trimmed oldest-first until it fits.
/// Trimming is a loop, not a single pop: the capacity may have been
/// lowered at runtime below the current length, in which case one append
/// evicts several lines. A `None` capacity disables eviction entirely.
///
/// Retention is strict FIFO; severity never buys a line a longer stay.
pub struct BoundedDisplay {
    sink: Box<dyn DisplaySink>,
    capacity: Option<usize>,
}

impl BoundedDisplay {
    #[must_use]
    pub fn new(sink: Box<dyn DisplaySink>, capacity: Option<usize>) -> Self {
        Self { sink, capacity }
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Change the bound. Takes effect on the next append.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.sink.line_count()
    }

    #[must_use]
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    /// Append a line, then evict oldest-first until within capacity.
    pub fn append(&mut self, line: &RenderedLine) -> Result<()> {
        self.sink.append(line)?;
        self.evict();
        Ok(())
    }

    fn evict(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        while self.sink.line_count() > capacity {
            let before = self.sink.line_count();
            self.sink.remove_oldest();
            if self.sink.line_count() >= before {
                // the sink refuses to shrink; don't spin forever
                break;
            }
        }
    }
}

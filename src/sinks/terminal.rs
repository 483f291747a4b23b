//! Terminal display sink

use crate::core::error::Result;
use crate::core::request::RenderedLine;
use crate::core::sink::DisplaySink;
use colored::Colorize;

/// A display sink that prints lines to stdout.
///
/// Lines are colored with their resolved truecolor value unless colors
/// are turned off. The line count tracks what has been printed; removal
/// only adjusts that count, since printed scrollback belongs to the host
/// terminal.
pub struct TerminalDisplay {
    use_colors: bool,
    line_count: usize,
}

impl TerminalDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_colors: true,
            line_count: 0,
        }
    }

    #[must_use]
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            line_count: 0,
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TerminalDisplay {
    fn append(&mut self, line: &RenderedLine) -> Result<()> {
        if self.use_colors {
            println!("{}", line.text.color(line.color.to_terminal()));
        } else {
            println!("{}", line.text);
        }
        self.line_count += 1;
        Ok(())
    }

    fn line_count(&self) -> usize {
        self.line_count
    }

    fn remove_oldest(&mut self) {
        self.line_count = self.line_count.saturating_sub(1);
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

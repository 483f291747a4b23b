//! Shipped sink implementations

pub mod file;
pub mod memory;
#[cfg(feature = "terminal")]
pub mod terminal;

pub use file::FileSink;
pub use memory::MemoryDisplay;
#[cfg(feature = "terminal")]
pub use terminal::TerminalDisplay;
